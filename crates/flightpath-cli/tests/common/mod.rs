//! Shared helpers for CLI integration tests.

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../docs/fixtures")
        .canonicalize()
        .expect("fixtures present")
}

pub fn cli() -> Command {
    cargo_bin_cmd!("flightpath")
}

/// Command wired to the fixture network with an empty data directory, so
/// the airport file is copied from the local override instead of downloaded.
pub fn prepare_command() -> (Command, TempDir) {
    let temp_dir = TempDir::new().expect("create temp dir");
    let fixtures = fixtures_dir();
    let mut cmd = cli();
    cmd.env("FLIGHTPATH_AIRPORTS_SOURCE", fixtures.join("airports.dat"))
        .env("FLIGHTPATH_FLIGHTS", fixtures.join("flights.csv"))
        .env_remove("FLIGHTPATH_AIRCRAFT_DATA")
        .env("RUST_LOG", "error")
        .env("NO_COLOR", "1")
        .arg("--no-logo")
        .arg("--data-dir")
        .arg(temp_dir.path());
    (cmd, temp_dir)
}
