//! Aircraft performance profiles and catalog management.
//!
//! This module is organized into focused submodules:
//!
//! - [`profile`] - Aircraft fuel/speed profile and per-leg consumption figures
//! - [`catalog`] - Built-in and CSV-backed aircraft catalogs
//! - [`constants`] - Unit conversions and fixed fuel-planning margins
//!
//! # Example
//!
//! ```
//! use flightpath_lib::aircraft::AircraftCatalog;
//!
//! let catalog = AircraftCatalog::builtin();
//! let a320 = catalog.get("a320").unwrap();
//!
//! // JFK -> LAX is 2475 statute miles.
//! assert!(a320.can_fly(2475.0));
//! let fuel = a320.leg_fuel_cost(2475.0);
//! assert!((fuel - 11876.33).abs() < 0.01);
//! ```

pub mod catalog;
pub mod constants;
pub mod profile;

pub use catalog::AircraftCatalog;
pub use constants::{FUEL_RESERVE_FACTOR, KNOTS_TO_MPH, TAKEOFF_PENALTY_KG};
pub use profile::AircraftProfile;
