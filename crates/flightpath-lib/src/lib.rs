//! Flightpath library entry points.
//!
//! This crate builds fuel-constrained route graphs from flight-leg tables and
//! finds the minimum-fuel route between two airports for a chosen aircraft.
//! It also exposes the loaders for the aircraft catalog, the flight-leg table
//! and the airport reference file, plus helpers to locate that file on disk.
//! Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!
//! # Example
//!
//! ```
//! use flightpath_lib::{
//!     build_graph, optimize_route, AircraftCatalog, AirportCoordinates, AirportPosition,
//!     FlightLeg,
//! };
//!
//! let coords: AirportCoordinates = [
//!     ("JFK", AirportPosition::new(40.64, -73.78)),
//!     ("LAX", AirportPosition::new(33.94, -118.41)),
//! ]
//! .into_iter()
//! .collect();
//! let legs = vec![FlightLeg::new("JFK", "LAX", 2475.0)];
//! let a320 = AircraftCatalog::builtin().require("A320").unwrap().clone();
//!
//! let graph = build_graph(&legs, &coords, &a320);
//! let plan = optimize_route(&graph, "JFK", "LAX").unwrap();
//! assert_eq!(plan.steps, vec!["JFK", "LAX"]);
//! ```

#![deny(warnings)]

pub mod aircraft;
pub mod airports;
pub mod dataset;
pub mod error;
pub mod flights;
pub mod graph;
pub mod output;
pub mod path;
pub mod routing;

pub use aircraft::{AircraftCatalog, AircraftProfile};
pub use airports::{AirportCoordinates, AirportPosition};
pub use dataset::{
    default_dataset_path, download_airports_dataset, ensure_airports_dataset,
    resolve_dataset_path,
};
pub use error::{Error, Result};
pub use flights::{known_airports, load_flight_legs, read_flight_legs, require_airport, FlightLeg};
pub use graph::{build_graph, Edge, EdgeWeights, Graph, GraphBuildStats};
pub use output::{RouteRenderMode, RouteSummary, StopRole};
pub use path::find_route_dijkstra;
pub use routing::{optimize_route, RouteLeg, RoutePlan};
