use std::fs;
use std::path::{Path, PathBuf};

use flightpath_lib::dataset::download_from_source;
use flightpath_lib::{ensure_airports_dataset, AirportCoordinates};
use tempfile::tempdir;

const AIRPORTS_SOURCE_ENV: &str = "FLIGHTPATH_AIRPORTS_SOURCE";

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/airports.dat")
}

fn with_airports_override<F>(path: &Path, f: F)
where
    F: FnOnce(),
{
    std::env::set_var(AIRPORTS_SOURCE_ENV, path);
    let guard = ScopeGuard;
    f();
    drop(guard);
}

struct ScopeGuard;

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        std::env::remove_var(AIRPORTS_SOURCE_ENV);
    }
}

#[test]
fn missing_dataset_is_fetched_from_local_override() -> flightpath_lib::Result<()> {
    let fixture = fixture_path();
    let temp_dir = tempdir()?;
    let data_dir = temp_dir.path().join("data");

    let mut resolved = PathBuf::new();
    with_airports_override(&fixture, || {
        resolved = ensure_airports_dataset(Some(&data_dir)).expect("dataset ensured");
    });

    assert_eq!(resolved, data_dir.join("airports.dat"));
    assert_eq!(fs::read(&fixture)?, fs::read(&resolved)?);

    let coords = AirportCoordinates::from_path(&resolved)?;
    assert!(coords.contains("JFK"));
    Ok(())
}

#[test]
fn explicit_file_target_is_kept_verbatim() -> flightpath_lib::Result<()> {
    let temp_dir = tempdir()?;
    let target = temp_dir.path().join("custom-airports.csv");
    download_from_source(&target, &fixture_path())?;

    let resolved = ensure_airports_dataset(Some(&target))?;
    assert_eq!(resolved, target);
    Ok(())
}
