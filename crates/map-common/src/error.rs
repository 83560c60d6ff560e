//! Error types for the map service.

use thiserror::Error;

/// Result type alias using MapError.
pub type MapResult<T> = Result<T, MapError>;

/// Message shown when the first coordinate line matches neither grammar.
pub const INVALID_COORDINATES_MESSAGE: &str = "I can't interpret these coordinates";

/// Message shown when a download is requested before any map was generated.
pub const NO_MAP_MESSAGE: &str = "There is no map in memory";

/// Primary error type for map operations.
#[derive(Debug, Error)]
pub enum MapError {
    // === Input Errors ===
    #[error("Coordinates contain an error in the first line and cannot be interpreted: {line}")]
    InvalidFormat { line: String },

    #[error("Unrecognized map type: {0}")]
    UnknownStyle(String),

    // === Cache Errors ===
    #[error("No map has been generated yet")]
    CacheAbsent,
}

impl MapError {
    /// Fixed, human-readable message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            MapError::InvalidFormat { .. } => INVALID_COORDINATES_MESSAGE.to_string(),
            MapError::CacheAbsent => NO_MAP_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            MapError::InvalidFormat { .. } | MapError::UnknownStyle(_) => 422,
            MapError::CacheAbsent => 404,
        }
    }
}
