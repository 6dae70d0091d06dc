//! Shared error types for the crate

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for catalog-filter operations
///
/// The filtering engine itself is total; errors only come from the
/// edges: parsing enumerated strings, loading config and catalog files,
/// and writing to a URL port.
#[derive(Debug, Error)]
pub enum Error {
    /// A string did not name a known value of an enumerated type
    #[error("invalid {kind}: {value:?}")]
    InvalidValue { kind: &'static str, value: String },

    /// Configuration file could not be parsed
    #[error("Configuration error in {}: {source}", path.display())]
    Configuration {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Navigation target rejected a query string write
    #[error("URL write failed: {0}")]
    UrlWrite(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid value error for an enumerated type
    pub fn invalid_value(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            kind,
            value: value.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}
