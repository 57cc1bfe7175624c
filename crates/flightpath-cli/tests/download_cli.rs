mod common;

use std::fs;

use common::{fixtures_dir, prepare_command};
use predicates::prelude::*;

#[test]
fn download_copies_local_override() {
    let (mut cmd, temp) = prepare_command();
    cmd.arg("download");

    let expected = temp.path().join("airports.dat");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Airport dataset available at"))
        .stdout(predicate::str::contains(expected.display().to_string()));

    let copied = fs::read(&expected).expect("dataset copied");
    let original = fs::read(fixtures_dir().join("airports.dat")).expect("fixture");
    assert_eq!(copied, original);
}

#[test]
fn download_force_replaces_existing_file() {
    let (mut cmd, temp) = prepare_command();
    let target = temp.path().join("airports.dat");
    fs::write(&target, "stale").expect("write stale dataset");
    cmd.args(["download", "--force"]);

    cmd.assert().success();
    assert_ne!(fs::read_to_string(&target).expect("read"), "stale");
}

#[test]
fn existing_dataset_is_kept_without_force() {
    let (mut cmd, temp) = prepare_command();
    let target = temp.path().join("airports.dat");
    fs::write(&target, "cached").expect("write cached dataset");
    cmd.args(["--format", "json", "download"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"dataset_path\""));
    assert_eq!(fs::read_to_string(&target).expect("read"), "cached");
}

#[test]
fn missing_override_source_fails() {
    let (mut cmd, temp) = prepare_command();
    cmd.env("FLIGHTPATH_AIRPORTS_SOURCE", temp.path().join("nope.dat"))
        .arg("download");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("airport dataset not found"));
}
