use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the flightpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Airport reference file could not be located at the resolved path.
    #[error("airport dataset not found at {path}")]
    DatasetNotFound { path: PathBuf },

    /// No suitable project directories could be resolved for this platform.
    #[error("failed to resolve project directories for the airport dataset")]
    ProjectDirsUnavailable,

    /// Raised when an airport code is not part of the loaded flight network.
    #[error("unknown airport code: {code}{}", format_suggestions(.suggestions))]
    UnknownAirport {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when an aircraft model is not present in the catalog.
    #[error("unknown aircraft model: {model}{}", format_suggestions(.suggestions))]
    UnknownAircraft {
        model: String,
        suggestions: Vec<String>,
    },

    /// Raised when no route connects two airports for the selected aircraft.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a computed route plan lacks any airports.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when an aircraft profile or catalog entry fails validation.
    #[error("invalid aircraft data: {message}")]
    AircraftDataValidation { message: String },

    /// Raised when duplicate model names are encountered during catalog load.
    #[error("duplicate aircraft model encountered: {model}")]
    DuplicateAircraftModel { model: String },

    /// Raised when the flight-leg table is malformed.
    #[error("invalid flight data: {message}")]
    FlightDataValidation { message: String },

    /// Raised when the airport reference file is malformed.
    #[error("invalid airport data: {message}")]
    AirportDataValidation { message: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for HTTP client errors.
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// Rank `candidates` by similarity to `query` and return the best `limit` matches.
///
/// Matching is case-insensitive and uses Jaro-Winkler similarity, which favours
/// shared prefixes and suits short identifiers such as IATA codes.
pub(crate) fn fuzzy_matches<'a, I>(candidates: I, query: &str, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    const MIN_SIMILARITY: f64 = 0.7;

    let needle = query.trim().to_ascii_uppercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = candidates
        .into_iter()
        .map(|candidate| {
            let score = strsim::jaro_winkler(&needle, &candidate.to_ascii_uppercase());
            (score, candidate)
        })
        .filter(|(score, _)| *score >= MIN_SIMILARITY)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
