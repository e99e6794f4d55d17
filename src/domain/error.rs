//! Error types for dashfilters.

use thiserror::Error;

/// Main error type for dashfilters.
///
/// Filters themselves never fail on bad input; these errors come from
/// building the registry, looking filters up, and loading query sets.
#[derive(Debug, Error)]
pub enum FilterError {
    /// No filter registered under the requested name
    #[error("Unknown filter: {0}")]
    UnknownFilter(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex error
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
