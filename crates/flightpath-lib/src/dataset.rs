use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use reqwest::blocking::Client;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Default filename for the cached airport reference file.
pub const DATASET_FILENAME: &str = "airports.dat";

/// Upstream location of the OpenFlights airport reference file.
pub const AIRPORTS_URL: &str =
    "https://raw.githubusercontent.com/jpatokal/openflights/master/data/airports.dat";

const DATA_DIR_ENV: &str = "FLIGHTPATH_DATA_DIR";
const AIRPORTS_SOURCE_ENV: &str = "FLIGHTPATH_AIRPORTS_SOURCE";

/// Resolve the default dataset location using platform-specific project directories.
pub fn default_dataset_path() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "flightpath", "flightpath")
        .ok_or(Error::ProjectDirsUnavailable)?;
    Ok(normalize_data_dir(dirs.data_dir()).join(DATASET_FILENAME))
}

fn normalize_data_dir(path: &Path) -> PathBuf {
    #[cfg(windows)]
    {
        normalize_windows_data_dir(path)
    }
    #[cfg(not(windows))]
    {
        path.to_path_buf()
    }
}

#[cfg(windows)]
const MAX_NORMALIZATION_ITERATIONS: usize = 100;

/// Collapse duplicate consecutive directory names such as
/// `%APPDATA%\flightpath\flightpath\data`, which `directories` can yield on Windows.
#[cfg(windows)]
fn normalize_windows_data_dir(path: &Path) -> PathBuf {
    fn try_collapse_duplicate(current: &Path) -> Option<PathBuf> {
        let parent = current.parent()?;
        let grandparent = parent.parent()?;
        let same = parent
            .file_name()?
            .to_string_lossy()
            .eq_ignore_ascii_case(&grandparent.file_name()?.to_string_lossy());
        if !same {
            return None;
        }
        let mut base = grandparent.to_path_buf();
        if let Some(file_name) = current.file_name() {
            base.push(file_name);
        }
        Some(base)
    }

    let mut current = path.to_path_buf();
    for _ in 0..MAX_NORMALIZATION_ITERATIONS {
        match try_collapse_duplicate(&current) {
            Some(next) if next != current => current = next,
            _ => break,
        }
    }
    current
}

/// Resolve where the airport reference file should live without touching the network.
///
/// The resolution order is:
/// 1. Explicit `target` argument when provided.
/// 2. `FLIGHTPATH_DATA_DIR` environment variable.
/// 3. Platform-specific project data directory.
///
/// A path with an extension is taken as the file itself; anything else is a
/// directory that holds `airports.dat`.
pub fn resolve_dataset_path(target: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = target {
        return Ok(canonical_dataset_path(explicit));
    }

    if let Some(env_path) = env::var_os(DATA_DIR_ENV) {
        return Ok(canonical_dataset_path(Path::new(&env_path)));
    }

    default_dataset_path()
}

/// Ensure the airport reference file is available locally and return its path.
///
/// The file is downloaded only when it does not exist yet at the resolved
/// location (see [`resolve_dataset_path`]).
pub fn ensure_airports_dataset(target: Option<&Path>) -> Result<PathBuf> {
    let path = resolve_dataset_path(target)?;
    if path.exists() {
        debug!(path = %path.display(), "using cached airport dataset");
        return Ok(path);
    }

    download_airports_dataset(&path)?;
    Ok(path)
}

/// Fetch the airport reference file into `target_path`, replacing any existing copy.
///
/// When `FLIGHTPATH_AIRPORTS_SOURCE` is set the named local file is copied
/// instead of contacting the network.
pub fn download_airports_dataset(target_path: &Path) -> Result<()> {
    if let Some(source) = env::var_os(AIRPORTS_SOURCE_ENV) {
        let override_path = PathBuf::from(source);
        info!(
            target = %target_path.display(),
            override = %override_path.display(),
            "using local airport dataset override"
        );
        return download_from_source(target_path, &override_path);
    }

    ensure_parent(target_path)?;
    info!(
        url = AIRPORTS_URL,
        "downloading airport dataset to {}",
        target_path.display()
    );
    let client = build_client()?;
    let parent = target_path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(parent)?;
    download_to_file(&client, AIRPORTS_URL, tmp.as_file_mut())?;
    tmp.flush()?;
    replace_with(tmp, target_path)
}

/// Copy a local airport reference file into `target_path`.
///
/// This is the code path behind `FLIGHTPATH_AIRPORTS_SOURCE`; tests call it
/// directly so they do not have to mutate the process environment.
pub fn download_from_source(target_path: &Path, source: &Path) -> Result<()> {
    if !source.is_file() {
        return Err(Error::DatasetNotFound {
            path: source.to_path_buf(),
        });
    }
    ensure_parent(target_path)?;
    copy_file_atomic(source, target_path)
}

fn canonical_dataset_path(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        return path.to_path_buf();
    }

    path.join(DATASET_FILENAME)
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent)?;
        }
        _ => warn!(target = %path.display(), "dataset target path lacks parent directory"),
    }
    Ok(())
}

fn build_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(user_agent())
        .build()
        .map_err(Error::Http)
}

fn user_agent() -> String {
    format!(
        "flightpath-lib/{version} ({repo})",
        version = env!("CARGO_PKG_VERSION"),
        repo = "https://github.com/scetrov/flightpath-rs"
    )
}

fn download_to_file(client: &Client, url: &str, file: &mut File) -> Result<()> {
    let mut response = client.get(url).send()?.error_for_status()?;
    io::copy(&mut response, file)?;
    Ok(())
}

fn copy_file_atomic(source: &Path, destination: &Path) -> Result<()> {
    if source == destination {
        return Ok(());
    }
    let parent = destination.parent().unwrap_or_else(|| Path::new("."));
    let mut reader = File::open(source)?;
    let mut tmp = NamedTempFile::new_in(parent)?;
    io::copy(&mut reader, tmp.as_file_mut())?;
    tmp.flush()?;
    replace_with(tmp, destination)
}

fn replace_with(tmp: NamedTempFile, destination: &Path) -> Result<()> {
    if destination.exists() {
        fs::remove_file(destination)?;
    }
    tmp.persist(destination).map_err(|err| err.error)?;
    Ok(())
}
