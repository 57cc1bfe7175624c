//! Common test utilities and fixture helpers.
//!
//! Integration tests load the small North American network under
//! `docs/fixtures/` so scenarios can be asserted against known figures.

use std::path::PathBuf;

use flightpath_lib::{
    build_graph, load_flight_legs, AircraftCatalog, AircraftProfile, AirportCoordinates,
    FlightLeg, Graph,
};

/// Path to fixtures directory shared by the library and CLI tests.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

pub fn fixture_legs() -> Vec<FlightLeg> {
    load_flight_legs(&fixtures_dir().join("flights.csv")).expect("load fixture flights.csv")
}

pub fn fixture_coordinates() -> AirportCoordinates {
    AirportCoordinates::from_path(&fixtures_dir().join("airports.dat"))
        .expect("load fixture airports.dat")
}

/// Built-in profile for `model`.
pub fn aircraft(model: &str) -> AircraftProfile {
    AircraftCatalog::builtin()
        .require(model)
        .expect("builtin aircraft")
        .clone()
}

/// Route graph of the fixture network for a built-in aircraft model.
pub fn fixture_graph(model: &str) -> Graph {
    build_graph(&fixture_legs(), &fixture_coordinates(), &aircraft(model))
}

/// Asserts two floats agree to within `tolerance`.
#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} (±{tolerance}), got {actual}"
    );
}
