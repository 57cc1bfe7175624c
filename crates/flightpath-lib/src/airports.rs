//! Airport coordinate reference data.
//!
//! Coordinates are loaded from the OpenFlights `airports.dat` layout: a
//! header-less CSV with fourteen quoted columns, of which the IATA code
//! (index 4), latitude (index 6) and longitude (index 7) are used.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

const IATA_COLUMN: usize = 4;
const LATITUDE_COLUMN: usize = 6;
const LONGITUDE_COLUMN: usize = 7;

/// Placeholder OpenFlights uses for missing values.
const NULL_MARKER: &str = "\\N";

/// Geographic position of an airport in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AirportPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl AirportPosition {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Mapping from uppercase airport code to its position.
#[derive(Debug, Clone, Default)]
pub struct AirportCoordinates {
    positions: HashMap<String, AirportPosition>,
}

impl AirportCoordinates {
    /// Load coordinates from an `airports.dat` file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Load coordinates from a reader in the `airports.dat` layout.
    ///
    /// Rows without an IATA code are skipped. When a code appears more than
    /// once the first row wins.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::Fields)
            .from_reader(reader);

        let mut positions = HashMap::new();
        let mut skipped = 0usize;

        for (offset, result) in csv_reader.records().enumerate() {
            let line = offset + 1;
            let record = result.map_err(|e| Error::AirportDataValidation {
                message: format!("line {line}: {e}"),
            })?;

            let code = record.get(IATA_COLUMN).unwrap_or("").trim();
            if code.is_empty() || code == NULL_MARKER {
                skipped += 1;
                continue;
            }
            let code = code.to_ascii_uppercase();

            let coordinate = |column: usize, label: &str| -> Result<f64> {
                let raw = record.get(column).unwrap_or("").trim();
                raw.parse::<f64>()
                    .ok()
                    .filter(|value| value.is_finite())
                    .ok_or_else(|| Error::AirportDataValidation {
                        message: format!("invalid {label} '{raw}' for airport {code} on line {line}"),
                    })
            };

            let position = AirportPosition::new(
                coordinate(LATITUDE_COLUMN, "latitude")?,
                coordinate(LONGITUDE_COLUMN, "longitude")?,
            );

            positions.entry(code).or_insert(position);
        }

        debug!(
            airports = positions.len(),
            skipped, "loaded airport coordinates"
        );

        Ok(Self { positions })
    }

    /// Position of `code` (case-insensitive).
    pub fn get(&self, code: &str) -> Option<AirportPosition> {
        self.positions
            .get(code)
            .or_else(|| self.positions.get(&code.trim().to_ascii_uppercase()))
            .copied()
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Number of airports with known coordinates.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate over all known codes in arbitrary order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.positions.keys().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<(S, AirportPosition)> for AirportCoordinates {
    fn from_iter<T: IntoIterator<Item = (S, AirportPosition)>>(iter: T) -> Self {
        let positions = iter
            .into_iter()
            .map(|(code, position)| (code.as_ref().trim().to_ascii_uppercase(), position))
            .collect();
        Self { positions }
    }
}
