//! Flight-leg table loading.
//!
//! The leg table is a CSV with one row per nonstop connection. The canonical
//! headers are `ORIGIN`, `DEST` and `DISTANCE IN MILES`; a few common
//! alternative spellings are accepted and extra columns are ignored.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::airports::AirportCoordinates;
use crate::error::{fuzzy_matches, Error, Result};

/// One nonstop connection between two airports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub origin: String,
    pub destination: String,
    /// Great-circle distance in statute miles.
    pub distance: f64,
}

impl FlightLeg {
    /// Create a leg, normalising both airport codes to uppercase.
    pub fn new(origin: impl AsRef<str>, destination: impl AsRef<str>, distance: f64) -> Self {
        Self {
            origin: normalize_code(origin.as_ref()),
            destination: normalize_code(destination.as_ref()),
            distance,
        }
    }
}

/// Load flight legs from a CSV file.
pub fn load_flight_legs(path: &Path) -> Result<Vec<FlightLeg>> {
    let file = fs::File::open(path)?;
    let legs = read_flight_legs(file)?;
    debug!(path = %path.display(), legs = legs.len(), "loaded flight legs");
    Ok(legs)
}

/// Read flight legs from any CSV reader.
pub fn read_flight_legs<R: Read>(reader: R) -> Result<Vec<FlightLeg>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| Error::FlightDataValidation {
            message: format!("failed to read flight data headers: {err}"),
        })?
        .clone();
    let columns = LegColumns::resolve(&headers)?;

    let mut legs = Vec::new();
    for (offset, result) in csv_reader.records().enumerate() {
        let row = offset + 2;
        let record = result.map_err(|e| Error::FlightDataValidation {
            message: format!("row {row}: {e}"),
        })?;

        let origin = record.get(columns.origin).unwrap_or("");
        let destination = record.get(columns.destination).unwrap_or("");
        if origin.is_empty() || destination.is_empty() {
            warn!(row, "skipping flight leg with an empty airport code");
            continue;
        }

        let raw_distance = record.get(columns.distance).unwrap_or("");
        let distance = raw_distance
            .parse::<f64>()
            .ok()
            .filter(|d| d.is_finite() && *d >= 0.0)
            .ok_or_else(|| Error::FlightDataValidation {
                message: format!(
                    "invalid distance '{raw_distance}' for {origin}-{destination} at row {row}"
                ),
            })?;

        legs.push(FlightLeg::new(origin, destination, distance));
    }

    Ok(legs)
}

/// Airports that appear in the leg table and have known coordinates, sorted.
///
/// This is the set of codes a caller may offer for selection. It does not
/// depend on any aircraft: a listed airport may still be unreachable for a
/// given profile.
pub fn known_airports(legs: &[FlightLeg], coords: &AirportCoordinates) -> Vec<String> {
    let codes: BTreeSet<&str> = legs
        .iter()
        .flat_map(|leg| [leg.origin.as_str(), leg.destination.as_str()])
        .filter(|code| coords.contains(code))
        .collect();
    codes.into_iter().map(str::to_string).collect()
}

/// Resolve `code` against the selectable airports, returning its normalised form.
///
/// `known` must be sorted, as returned by [`known_airports`]. Unknown codes
/// yield [`Error::UnknownAirport`] with up to three close matches.
pub fn require_airport(known: &[String], code: &str) -> Result<String> {
    let normalized = normalize_code(code);
    if known.binary_search(&normalized).is_ok() {
        return Ok(normalized);
    }
    Err(Error::UnknownAirport {
        suggestions: fuzzy_matches(known.iter().map(String::as_str), &normalized, 3),
        code: normalized,
    })
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[derive(Debug, Clone, Copy)]
struct LegColumns {
    origin: usize,
    destination: usize,
    distance: usize,
}

impl LegColumns {
    fn resolve(headers: &StringRecord) -> Result<Self> {
        let normalized: BTreeMap<String, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (normalize_header(h), i))
            .collect();

        let find = |alts: &[&str]| alts.iter().find_map(|alt| normalized.get(*alt).copied());

        let origin = find(&["origin", "from", "departure"]);
        let destination = find(&["dest", "destination", "to", "arrival"]);
        let distance = find(&["distance_in_miles", "distance_miles", "distance"]);

        match (origin, destination, distance) {
            (Some(origin), Some(destination), Some(distance)) => Ok(Self {
                origin,
                destination,
                distance,
            }),
            _ => {
                let mut missing = Vec::new();
                if origin.is_none() {
                    missing.push("ORIGIN");
                }
                if destination.is_none() {
                    missing.push("DEST");
                }
                if distance.is_none() {
                    missing.push("DISTANCE IN MILES");
                }
                Err(Error::FlightDataValidation {
                    message: format!(
                        "flight data missing required columns: {}. Available: {}",
                        missing.join(", "),
                        headers.iter().collect::<Vec<_>>().join(", ")
                    ),
                })
            }
        }
    }
}

fn normalize_header(header: &str) -> String {
    header
        .trim()
        .to_ascii_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}
