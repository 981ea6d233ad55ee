//! Error types for the medkb_core library.

use std::io;
use std::path::PathBuf;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for medkb_core operations
///
/// Lookups that find nothing and searches that match nothing are not errors;
/// they surface as `None` and empty vectors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A store failed load-time validation and was not published
    #[error(
        "Store '{store}' failed validation ({} violation(s)):\n  - {}",
        .violations.len(),
        .violations.join("\n  - ")
    )]
    StoreValidation {
        store: String,
        violations: Vec<String>,
    },

    /// A store file could not be interpreted
    #[error("Invalid store file {path:?}: {reason}")]
    InvalidStoreFile { path: PathBuf, reason: String },

    /// No store with this name is loaded
    #[error("Unknown store: {0}")]
    UnknownStore(String),

    /// Two stores were registered under the same name
    #[error("Duplicate store name: {0}")]
    DuplicateStore(String),

    /// Explanation levels run from 1 to 5
    #[error("Invalid level {0}: levels range from 1 to 5")]
    InvalidLevel(u8),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
