//! Error types for Elevation Core
//!
//! Every failure the core can produce is a lookup failure: a key that is not
//! in one of the static tables, or a cocktail mix with nothing usable in it.
//! Each variant carries the keys the caller could have used instead.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for elevation operations
pub type Result<T> = std::result::Result<T, LookupError>;

/// Lookup failure against the static tables
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Substance key is not in the substance table
    #[error("Unknown substance: {key}")]
    UnknownSubstance {
        /// The key that was asked for
        key: String,
        /// Valid substance keys, in table order
        available: Vec<&'static str>,
    },

    /// Vibe key is not in the vibe table
    #[error("Unknown vibe: {key}")]
    UnknownVibe {
        /// The key that was asked for
        key: String,
        /// Valid vibe keys, in table order
        available: Vec<&'static str>,
    },

    /// A cocktail mix contained no known substance
    #[error("No valid substances provided")]
    NoValidSubstances {
        /// Valid substance keys, in table order
        available: Vec<&'static str>,
    },
}

impl LookupError {
    /// Keys the caller can choose from instead
    pub fn available(&self) -> &[&'static str] {
        match self {
            Self::UnknownSubstance { available, .. }
            | Self::UnknownVibe { available, .. }
            | Self::NoValidSubstances { available } => available,
        }
    }
}

/// Wire form of a [`LookupError`]: `{"error": ..., "available": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupFailure {
    /// Human-readable error message
    pub error: String,
    /// Valid keys for the failed lookup
    pub available: Vec<String>,
}

impl From<&LookupError> for LookupFailure {
    fn from(err: &LookupError) -> Self {
        Self {
            error: err.to_string(),
            available: err.available().iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl From<LookupError> for LookupFailure {
    fn from(err: LookupError) -> Self {
        Self::from(&err)
    }
}

/// Either a successful response record or a lookup failure.
///
/// Serializes untagged, so clients see exactly one of the two shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply<T> {
    /// The operation produced its record
    Ok(T),
    /// The operation failed a table lookup
    Failed(LookupFailure),
}

impl<T> Reply<T> {
    /// Whether this reply carries a lookup failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl<T> From<Result<T>> for Reply<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(err) => Self::Failed(err.into()),
        }
    }
}
