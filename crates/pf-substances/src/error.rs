//! Substance data errors.

use pf_core::{NonFinite, PfError};
use thiserror::Error;

/// Result type for substance operations.
pub type SubstanceResult<T> = Result<T, SubstanceError>;

/// Errors that can occur while loading substances or evaluating their properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubstanceError {
    /// No Antoine range covers the requested temperature.
    #[error("No Antoine range of '{substance}' covers {temperature_k} K")]
    OutOfRange {
        substance: String,
        temperature_k: f64,
    },

    /// A data source could not supply the substance.
    #[error("Data unavailable for '{name}': {reason}")]
    DataUnavailable { name: String, reason: String },

    /// Antoine table failed validation.
    #[error("Invalid Antoine table: {what} (record {index})")]
    InvalidTable { what: &'static str, index: usize },

    /// Non-physical values (negative molar mass, non-finite pressure, etc.).
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    /// Two substances normalize to the same tag.
    #[error("Substance '{tag}' is already registered")]
    Duplicate { tag: String },

    /// Lookup of a tag the registry does not hold.
    #[error("Unknown substance '{tag}'")]
    Unknown { tag: String },
}

impl From<NonFinite> for SubstanceError {
    fn from(e: NonFinite) -> Self {
        SubstanceError::NonPhysical {
            what: e.what,
            value: e.value,
        }
    }
}

impl From<SubstanceError> for PfError {
    fn from(err: SubstanceError) -> Self {
        let what = err.to_string();
        match err {
            SubstanceError::OutOfRange { .. } => PfError::OutOfRange { what },
            SubstanceError::DataUnavailable { .. } => PfError::DataUnavailable { what },
            SubstanceError::InvalidTable { .. } | SubstanceError::NonPhysical { .. } => {
                PfError::Invariant { what }
            }
            SubstanceError::Duplicate { .. } | SubstanceError::Unknown { .. } => {
                PfError::InvalidArg { what }
            }
        }
    }
}
