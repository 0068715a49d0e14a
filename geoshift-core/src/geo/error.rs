//! Error types for the geo module.
//!
//! The transforms themselves are total; errors only arise when parsing
//! user-supplied names into geo types.

use thiserror::Error;

/// Error type for geo operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeoError {
    /// The string does not name a supported coordinate standard.
    #[error("Unknown coordinate standard: {0}")]
    UnknownStandard(String),
}

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;
