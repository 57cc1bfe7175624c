mod common;

use std::io::Cursor;

use common::{assert_close, fixtures_dir};
use flightpath_lib::{AircraftCatalog, AircraftProfile, Error};

#[test]
fn fixture_catalog_loads() {
    let path = fixtures_dir().join("aircraft.csv");
    let catalog = AircraftCatalog::from_path(&path).expect("fixture catalog loads");

    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.model_names(), vec!["A320", "B777", "C56X", "CRJ9"]);
    assert_eq!(catalog.source_path(), Some(path.as_path()));
    assert_eq!(
        catalog.get("c56x"),
        AircraftCatalog::builtin().get("C56X"),
        "fixture rows match the built-in figures"
    );
}

#[test]
fn duplicate_models_are_rejected_case_insensitively() {
    let csv = "model,fuel_burn_kgph,cruise_speed_kts,max_fuel_per_flight\nA320,2406,447,24456.33\na320,2406,447,24456.33\n";
    let err = AircraftCatalog::from_reader(Cursor::new(csv)).expect_err("duplicate rejected");
    assert!(matches!(err, Error::DuplicateAircraftModel { ref model } if model == "A320"));
}

#[test]
fn missing_columns_are_listed() {
    let csv = "model,fuel_burn_kgph\nA320,2406\n";
    let err = AircraftCatalog::from_reader(Cursor::new(csv)).expect_err("missing columns");
    let message = err.to_string();
    assert!(message.contains("cruise_speed"), "{message}");
    assert!(message.contains("max_fuel_capacity"), "{message}");
}

#[test]
fn non_positive_values_fail_validation() {
    let csv = "model,fuel_burn_kgph,cruise_speed_kts,max_fuel_per_flight\nGLIDER,0,60,10\n";
    let err = AircraftCatalog::from_reader(Cursor::new(csv)).expect_err("zero burn");
    assert!(matches!(err, Error::AircraftDataValidation { .. }));

    assert!(AircraftProfile::new("X", 1.0, f64::NAN, 1.0).is_err());
    assert!(AircraftProfile::new("  ", 1.0, 1.0, 1.0).is_err());
}

#[test]
fn derived_figures_match_the_a320_scenario() {
    let a320 = AircraftCatalog::builtin().require("A320").expect("A320").clone();
    assert_close(a320.cruise_speed_mph(), 514.39866, 1e-5);
    assert_close(a320.fuel_per_mile(), 4.677306, 1e-6);
    assert_close(a320.feasibility_ceiling(), 23233.5135, 1e-4);
    assert_close(a320.max_range_miles(), 4903.15, 0.01);
    assert!(a320.can_fly(4903.0));
    assert!(!a320.can_fly(4904.0));
}

#[test]
fn unknown_model_suggests_neighbours() {
    let err = AircraftCatalog::builtin()
        .require("A32")
        .expect_err("unknown model");
    assert_eq!(
        err.to_string().split(". Did you mean").next(),
        Some("unknown aircraft model: A32")
    );
    match err {
        Error::UnknownAircraft { suggestions, .. } => {
            assert!(suggestions.contains(&"A320".to_string()), "{suggestions:?}")
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
