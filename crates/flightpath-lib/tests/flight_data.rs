mod common;

use common::{fixture_coordinates, fixture_legs, fixtures_dir};
use flightpath_lib::{known_airports, load_flight_legs, require_airport, Error, FlightLeg};

#[test]
fn fixture_flights_load_in_file_order() {
    let legs = fixture_legs();
    assert_eq!(legs.len(), 15);
    assert_eq!(legs[0], FlightLeg::new("JFK", "LAX", 2475.0));
    assert_eq!(legs[14], FlightLeg::new("ZZZ", "JFK", 100.0));
}

#[test]
fn fixture_airports_skip_rows_without_iata() {
    let coords = fixture_coordinates();
    assert_eq!(coords.len(), 11);
    let lhr = coords.get("lhr").expect("LHR present");
    assert!((lhr.latitude - 51.4706).abs() < 1e-6);
    assert!(!coords.contains("AYPY"));
}

#[test]
fn selectable_airports_need_coordinates() {
    let known = known_airports(&fixture_legs(), &fixture_coordinates());
    assert_eq!(
        known,
        vec!["ANC", "ATL", "BOS", "DEN", "FAI", "HNL", "JFK", "LAX", "LHR", "ORD", "SYD"]
    );
    assert!(matches!(
        require_airport(&known, "ZZZ"),
        Err(Error::UnknownAirport { .. })
    ));
}

#[test]
fn missing_flight_file_is_an_io_error() {
    let err = load_flight_legs(&fixtures_dir().join("does-not-exist.csv")).expect_err("missing");
    assert!(matches!(err, Error::Io(_)));
}
