//! Subcommand handlers.
//!
//! `main.rs` parses arguments and dispatches here; each module owns one
//! subcommand. Data loading shared between commands lives in this file.

pub mod aircraft;
pub mod airports;
pub mod download;
pub mod route;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use flightpath_lib::{
    ensure_airports_dataset, known_airports, load_flight_legs, AircraftCatalog,
    AirportCoordinates, FlightLeg,
};

/// Data sources selected through global options.
#[derive(Debug, Clone)]
pub struct DataOptions {
    /// Flight-leg CSV.
    pub flights: PathBuf,
    /// Explicit airport reference file.
    pub airports: Option<PathBuf>,
    /// Directory where the airport reference file is cached.
    pub data_dir: Option<PathBuf>,
    /// CSV aircraft catalog replacing the built-in one.
    pub aircraft_data: Option<PathBuf>,
}

/// Flight legs and airport coordinates loaded from disk.
pub struct Network {
    pub legs: Vec<FlightLeg>,
    pub coords: AirportCoordinates,
}

impl Network {
    /// Airports that appear in the leg table and have coordinates.
    pub fn selectable_airports(&self) -> Vec<String> {
        known_airports(&self.legs, &self.coords)
    }
}

impl DataOptions {
    /// `--airports` wins over `--data-dir`; either may be absent.
    pub fn dataset_target(&self) -> Option<&Path> {
        self.airports.as_deref().or(self.data_dir.as_deref())
    }

    pub fn load_catalog(&self) -> Result<AircraftCatalog> {
        match &self.aircraft_data {
            Some(path) => AircraftCatalog::from_path(path)
                .with_context(|| format!("failed to load aircraft data from {}", path.display())),
            None => Ok(AircraftCatalog::builtin()),
        }
    }

    pub fn load_network(&self) -> Result<Network> {
        let airports_path = ensure_airports_dataset(self.dataset_target())
            .context("failed to locate or download the airport dataset")?;
        let coords = AirportCoordinates::from_path(&airports_path).with_context(|| {
            format!(
                "failed to load airport coordinates from {}",
                airports_path.display()
            )
        })?;
        let legs = load_flight_legs(&self.flights).with_context(|| {
            format!("failed to load flight legs from {}", self.flights.display())
        })?;
        debug!(
            legs = legs.len(),
            airports = coords.len(),
            "loaded flight network"
        );
        Ok(Network { legs, coords })
    }
}
