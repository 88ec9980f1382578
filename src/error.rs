//! Error types for Solidafy Schema
//!
//! The conversion core only ever fails in two ways: the input text is not
//! valid JSON, or it parses to a primitive. Everything past that point
//! (classification, synthesis, normalization, cleaning, envelope building)
//! is total. The remaining variants belong to the CLI and config layer.

use thiserror::Error;

/// Message reported when the input parses to a primitive value
pub const SHAPE_MESSAGE: &str = "JSON must be an object or array, not a primitive value";

/// The main error type for Solidafy Schema
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Conversion Errors
    // ============================================================================
    /// Input is not syntactically valid JSON. Displays the parser's message as-is.
    #[error("{0}")]
    Parse(#[from] serde_json::Error),

    /// Input parsed to a string, number, boolean or null
    #[error("{message}")]
    Shape { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create the fixed shape error
    pub fn shape() -> Self {
        Self::Shape {
            message: SHAPE_MESSAGE.to_string(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether this error came out of the conversion pipeline itself
    pub fn is_conversion_error(&self) -> bool {
        matches!(self, Error::Parse(_) | Error::Shape { .. })
    }
}

/// Result type alias for Solidafy Schema
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
