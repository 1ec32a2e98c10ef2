use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the campus navigation library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a location name matches neither a display name nor an alias.
    #[error("unknown location: {name}{}", format_suggestions(.suggestions))]
    UnknownLocation {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when the destination is unreachable under the threshold graph.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when an algorithm selector is outside the supported set.
    #[error("invalid algorithm selector '{selector}'; expected 1 (dijkstra), 2 (a-star) or 3 (floyd-warshall)")]
    InvalidAlgorithmSelector { selector: String },

    /// Raised when a computed route plan lacks any locations.
    #[error("route plan was empty")]
    EmptyRoutePlan,

    /// Raised when a location table contains no entries.
    #[error("location table is empty")]
    EmptyDataset,

    /// Raised when a location table exceeds the supported size.
    #[error("location table has {count} entries; at most {max} are supported")]
    TooManyLocations { count: usize, max: usize },

    /// Raised when two entries share a (case-insensitive) name or alias.
    #[error("duplicate location name encountered: {name}")]
    DuplicateLocationName { name: String },

    /// Raised when a location carries coordinates outside the valid range.
    #[error("invalid coordinates for {name}: ({latitude}, {longitude})")]
    InvalidCoordinates {
        name: String,
        latitude: f64,
        longitude: f64,
    },

    /// Raised when a location index does not exist in the table.
    #[error("location index {index} is out of range for a table of {len}")]
    LocationOutOfRange { index: usize, len: usize },

    /// Raised when a navigation setting is unusable.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// Raised when a location file could not be parsed.
    #[error("failed to parse location table {path}: {source}")]
    LocationFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON serialization errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
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
