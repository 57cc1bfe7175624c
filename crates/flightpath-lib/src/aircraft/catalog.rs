//! Aircraft catalog loading and management.
//!
//! The catalog is a static lookup table from model name to
//! [`AircraftProfile`]. A built-in catalog covers the common models; callers may
//! load a replacement from CSV.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use once_cell::sync::Lazy;

use crate::error::{fuzzy_matches, Error, Result};

use super::profile::AircraftProfile;

/// Built-in models: (model, fuel burn kg/h, cruise speed kts, max fuel per flight kg).
const BUILTIN_MODELS: &[(&str, f64, f64, f64)] = &[
    ("A320", 2406.0, 447.0, 24456.33),
    ("B777", 6834.0, 488.0, 145538.0),
    ("A380", 6834.0, 488.0, 253983.0),
    ("E195", 2406.0, 470.0, 12971.0),
    ("B737", 2406.0, 453.0, 21011.4),
    ("CRJ9", 1476.0, 447.0, 8888.0),
    ("C56X", 558.0, 430.0, 3057.213),
];

static BUILTIN_CATALOG: Lazy<AircraftCatalog> = Lazy::new(|| {
    let aircraft = BUILTIN_MODELS
        .iter()
        .map(|&(model, burn, speed, capacity)| {
            let profile = AircraftProfile {
                model: model.to_string(),
                fuel_burn_rate: burn,
                cruise_speed: speed,
                max_fuel_capacity: capacity,
            };
            (normalize_model(model), profile)
        })
        .collect();
    AircraftCatalog {
        aircraft,
        source: None,
    }
});

/// Collection of aircraft profiles keyed by normalised model name.
#[derive(Debug, Clone, Default)]
pub struct AircraftCatalog {
    aircraft: HashMap<String, AircraftProfile>,
    source: Option<PathBuf>,
}

impl AircraftCatalog {
    /// The built-in catalog of common airliner and business-jet models.
    pub fn builtin() -> Self {
        BUILTIN_CATALOG.clone()
    }

    /// Load a catalog from a CSV file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Load a catalog from a CSV reader (file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|err| Error::AircraftDataValidation {
                message: format!("failed to read aircraft catalog headers: {err}"),
            })?
            .clone();

        let normalized_headers: Vec<String> = headers.iter().map(normalize_header).collect();

        // Canonical field name -> accepted header spellings (normalised).
        let synonyms: &[(&str, &[&str])] = &[
            ("model", &["model", "name", "aircraft", "aircraft_model"]),
            (
                "fuel_burn_rate",
                &["fuel_burn_kgph", "fuel_burn_rate", "burn_rate", "burn"],
            ),
            (
                "cruise_speed",
                &["cruise_speed_kts", "cruise_speed", "speed_kts", "speed"],
            ),
            (
                "max_fuel_capacity",
                &[
                    "max_fuel_per_flight",
                    "max_fuel_capacity",
                    "fuel_capacity",
                    "max_fuel",
                ],
            ),
        ];

        let mut index_map: BTreeMap<&str, usize> = BTreeMap::new();
        for (canon, alts) in synonyms {
            let position = alts.iter().find_map(|alt| {
                let alt_n = normalize_header(alt);
                normalized_headers.iter().position(|h| *h == alt_n)
            });
            if let Some(i) = position {
                index_map.insert(*canon, i);
            }
        }

        let missing: Vec<&str> = synonyms
            .iter()
            .map(|(canon, _)| *canon)
            .filter(|canon| !index_map.contains_key(canon))
            .collect();

        if !missing.is_empty() {
            return Err(Error::AircraftDataValidation {
                message: format!(
                    "aircraft catalog missing required columns: {}. Available: {}",
                    missing.join(", "),
                    headers.iter().collect::<Vec<_>>().join(", ")
                ),
            });
        }

        let mut aircraft = HashMap::new();

        for (offset, result) in csv_reader.records().enumerate() {
            // Header occupies line 1.
            let row = offset + 2;
            let record = result.map_err(|e| Error::AircraftDataValidation {
                message: e.to_string(),
            })?;

            let model = field_value(&record, &index_map, "model").to_string();
            let number = |field: &str| -> Result<f64> {
                field_value(&record, &index_map, field)
                    .parse::<f64>()
                    .map_err(|e| Error::AircraftDataValidation {
                        message: format!(
                            "invalid {field} for aircraft '{model}' at row {row}: {e}"
                        ),
                    })
            };

            let profile = AircraftProfile::new(
                model.as_str(),
                number("fuel_burn_rate")?,
                number("cruise_speed")?,
                number("max_fuel_capacity")?,
            )?;

            let key = normalize_model(&profile.model);
            if aircraft.contains_key(&key) {
                return Err(Error::DuplicateAircraftModel { model: key });
            }
            aircraft.insert(key, profile);
        }

        Ok(Self {
            aircraft,
            source: None,
        })
    }

    /// Get an aircraft by model name (case-insensitive).
    pub fn get(&self, model: &str) -> Option<&AircraftProfile> {
        self.aircraft.get(&normalize_model(model))
    }

    /// Get an aircraft by model name, failing with suggestions when absent.
    pub fn require(&self, model: &str) -> Result<&AircraftProfile> {
        self.get(model).ok_or_else(|| Error::UnknownAircraft {
            model: model.trim().to_string(),
            suggestions: self.suggestions(model, 3),
        })
    }

    /// Closest known model names to `model`, best first.
    pub fn suggestions(&self, model: &str, limit: usize) -> Vec<String> {
        fuzzy_matches(self.aircraft.keys().map(String::as_str), model, limit)
    }

    /// Sorted list of all model names.
    pub fn model_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.aircraft.values().map(|a| a.model.clone()).collect();
        names.sort();
        names
    }

    /// All profiles sorted by model name.
    pub fn aircraft_sorted(&self) -> Vec<&AircraftProfile> {
        let mut aircraft: Vec<&AircraftProfile> = self.aircraft.values().collect();
        aircraft.sort_by(|a, b| a.model.cmp(&b.model));
        aircraft
    }

    /// Number of models in the catalog.
    pub fn len(&self) -> usize {
        self.aircraft.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aircraft.is_empty()
    }

    /// Source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn field_value<'r>(
    record: &'r StringRecord,
    index_map: &BTreeMap<&str, usize>,
    field: &str,
) -> &'r str {
    index_map
        .get(field)
        .and_then(|&i| record.get(i))
        .unwrap_or("")
        .trim()
}

fn normalize_model(model: &str) -> String {
    model.trim().to_ascii_uppercase()
}

fn normalize_header(header: &str) -> String {
    header
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}
