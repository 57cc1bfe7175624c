mod common;

use common::{aircraft, assert_close, fixture_coordinates, fixture_graph, fixture_legs};
use flightpath_lib::{build_graph, optimize_route, AirportCoordinates, AirportPosition, FlightLeg};

fn jfk_lax_coords() -> AirportCoordinates {
    [
        ("JFK", AirportPosition::new(40.6398, -73.7789)),
        ("LAX", AirportPosition::new(33.9425, -118.4081)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn jfk_lax_is_admissible_for_a320() {
    let profile = aircraft("A320");
    let legs = vec![FlightLeg::new("JFK", "LAX", 2475.0)];
    let graph = build_graph(&legs, &jfk_lax_coords(), &profile);

    let edge = graph.edge("JFK", "LAX").expect("edge admitted");
    assert_close(edge.weights.fuel_cost, 11876.33, 0.01);
    assert_close(edge.weights.flight_time, 4.8114, 0.0001);
    assert_close(profile.feasibility_ceiling(), 23233.51, 0.01);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.position("LAX"), Some(AirportPosition::new(33.9425, -118.4081)));
}

#[test]
fn leg_beyond_reserve_adjusted_range_is_absent() {
    let profile = aircraft("A320");
    let legs = vec![FlightLeg::new("JFK", "LAX", 6000.0)];
    assert!(profile.leg_fuel_cost(6000.0) > profile.feasibility_ceiling());

    let graph = build_graph(&legs, &jfk_lax_coords(), &profile);
    assert!(graph.edge("JFK", "LAX").is_none());
    assert!(graph.is_empty(), "no admissible edge means no nodes");
    assert_eq!(graph.stats().out_of_range, 1);
}

#[test]
fn legs_with_unknown_coordinates_create_nothing() {
    let legs = vec![
        FlightLeg::new("JFK", "XXX", 100.0),
        FlightLeg::new("YYY", "LAX", 100.0),
    ];
    let graph = build_graph(&legs, &jfk_lax_coords(), &aircraft("A320"));
    assert!(graph.is_empty());
    assert!(!graph.contains_airport("XXX"));
    assert!(!graph.contains_airport("JFK"));
    assert_eq!(graph.stats().unknown_airport, 2);
}

#[test]
fn fixture_network_filters_as_expected() {
    let graph = fixture_graph("A320");
    let stats = graph.stats();

    assert_eq!(stats.legs_read, 15);
    assert_eq!(stats.unknown_airport, 1);
    assert_eq!(stats.out_of_range, 2);
    assert_eq!(stats.admitted, 12);
    assert_eq!(graph.edge_count(), 12);
    assert!(!graph.contains_airport("SYD"));
    assert!(!graph.contains_airport("ZZZ"));
    assert_eq!(
        graph.airport_codes().collect::<Vec<_>>(),
        vec!["ANC", "ATL", "BOS", "DEN", "FAI", "HNL", "JFK", "LAX", "LHR", "ORD"]
    );
}

#[test]
fn every_fixture_edge_is_within_the_ceiling() {
    for model in ["A320", "B777", "CRJ9", "C56X", "E195"] {
        let profile = aircraft(model);
        let graph = fixture_graph(model);
        for code in graph.airport_codes() {
            for edge in graph.neighbours(code) {
                assert!(
                    edge.fuel_cost() <= profile.feasibility_ceiling(),
                    "{model} edge {code}-{} exceeds ceiling",
                    edge.target
                );
            }
        }

        // Every inadmissible leg with known coordinates is missing.
        let coords = fixture_coordinates();
        for leg in fixture_legs() {
            if coords.contains(&leg.origin)
                && coords.contains(&leg.destination)
                && !profile.can_fly(leg.distance)
            {
                assert!(graph.edge(&leg.origin, &leg.destination).is_none());
            }
        }
    }
}

#[test]
fn larger_aircraft_reach_more_airports() {
    assert!(fixture_graph("B777").contains_airport("SYD"));
    assert!(!fixture_graph("CRJ9").contains_airport("LHR"));
    assert!(!fixture_graph("C56X").contains_airport("HNL"));
}

#[test]
fn weights_are_bit_identical_across_builds() {
    let first = fixture_graph("E195");
    let second = fixture_graph("E195");

    for code in first.airport_codes() {
        let a = first.neighbours(code);
        let b = second.neighbours(code);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert_eq!(x.target, y.target);
            assert_eq!(x.fuel_cost().to_bits(), y.fuel_cost().to_bits());
            assert_eq!(x.flight_time().to_bits(), y.flight_time().to_bits());
        }
    }
}

#[test]
fn duplicate_pairs_keep_the_last_leg() {
    let legs = vec![
        FlightLeg::new("JFK", "LAX", 2475.0),
        FlightLeg::new("lax", "jfk", 2000.0),
    ];
    let profile = aircraft("A320");
    let graph = build_graph(&legs, &jfk_lax_coords(), &profile);

    assert_eq!(graph.edge_count(), 1);
    let edge = graph.edge("JFK", "LAX").expect("edge present");
    assert_eq!(edge.weights.distance, 2000.0);
    assert_eq!(
        edge.fuel_cost().to_bits(),
        profile.leg_fuel_cost(2000.0).to_bits()
    );
    assert_eq!(graph.stats().overwritten, 1);
}

#[test]
fn inadmissible_duplicate_does_not_replace_admissible_edge() {
    let legs = vec![
        FlightLeg::new("JFK", "LAX", 2475.0),
        FlightLeg::new("JFK", "LAX", 6000.0),
    ];
    let graph = build_graph(&legs, &jfk_lax_coords(), &aircraft("A320"));
    let edge = graph.edge("JFK", "LAX").expect("edge kept");
    assert_eq!(edge.weights.distance, 2475.0);
}

#[test]
fn legs_with_invalid_distances_are_skipped() {
    let legs = vec![
        FlightLeg::new("JFK", "LAX", 100.0),
        FlightLeg::new("JFK", "ORD", 200.0),
        FlightLeg::new("ORD", "LAX", -500.0),
        FlightLeg::new("ORD", "BOS", f64::NAN),
        FlightLeg::new("BOS", "LAX", f64::INFINITY),
    ];
    let graph = build_graph(&legs, &fixture_coordinates(), &aircraft("A320"));

    assert!(graph.edge("ORD", "LAX").is_none());
    assert!(graph.edge("ORD", "BOS").is_none());
    assert!(!graph.contains_airport("BOS"));
    assert_eq!(graph.stats().invalid_distance, 3);
    assert_eq!(graph.stats().admitted, 2);
    for code in graph.airport_codes() {
        for edge in graph.neighbours(code) {
            assert!(edge.weights.distance.is_finite() && edge.fuel_cost() >= 0.0);
        }
    }

    let plan = optimize_route(&graph, "JFK", "LAX").expect("direct leg remains");
    assert_eq!(plan.steps, vec!["JFK", "LAX"]);
    assert!(plan.total_fuel > 0.0);
}

#[test]
fn clones_share_the_same_snapshot_across_threads() {
    let graph = fixture_graph("A320");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = graph.clone();
            std::thread::spawn(move || graph.neighbours("JFK").len())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().expect("thread"), graph.neighbours("JFK").len());
    }
}
