//! Error types for the MARCXML input adapter and the attribute views.
//!
//! Field extraction itself never fails: missing or malformed data turns into
//! absent or null attributes. [`MarcError`] is only produced at the edges of the
//! crate, when MARCXML cannot be deserialized or when an output record cannot
//! be converted to its JSON view.

use thiserror::Error;

/// Error type for all fallible operations in this crate.
#[derive(Error, Debug)]
pub enum MarcError {
    /// Error indicating an invalid field structure (e.g. a subfield without a code).
    #[error("Invalid field: {0}")]
    InvalidField(String),

    /// Error during parsing of MARCXML data.
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Error while building the JSON view of an output record.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`MarcError`].
pub type Result<T> = std::result::Result<T, MarcError>;
