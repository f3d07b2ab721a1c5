//! Error types for the offer-data crate.

use thiserror::Error;

/// Errors that can occur while loading or decoding a saved response batch.
///
/// Malformed *fields* inside an otherwise well-formed offer (a garbage
/// duration or price string) are not errors; those degrade silently in
/// `parse`. Only file access and JSON decoding can fail.
#[derive(Error, Debug)]
pub enum OfferDataError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a response file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Response file is not valid flight-offers JSON
    #[error("Invalid JSON in {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },

    /// A value outside the accepted vocabulary (sort mode, time bucket, ...)
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, OfferDataError>;
