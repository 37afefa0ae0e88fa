//! Unit conversion errors.

use crate::quantity::Quantity;
use pf_core::{NonFinite, PfError};
use thiserror::Error;

/// Result type for unit conversions.
pub type UnitResult<T> = Result<T, UnitError>;

/// Errors that can occur while converting between units.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitError {
    /// Token not recognized for this quantity.
    #[error("Unsupported {quantity} unit '{unit}'")]
    UnknownUnit { quantity: Quantity, unit: String },

    /// Compound unit that cannot be split into flow and time parts.
    #[error("Malformed unit '{unit}': {reason}")]
    Malformed { unit: String, reason: &'static str },

    /// A molar/mass basis change needs at least one mixture component.
    #[error("Flow basis change from '{from}' to '{to}' needs a mixture")]
    EmptyMixture { from: String, to: String },

    /// Non-physical mixture data (molar mass <= 0, non-finite fraction).
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },
}

impl UnitError {
    pub(crate) fn unknown(quantity: Quantity, unit: &str) -> Self {
        UnitError::UnknownUnit {
            quantity,
            unit: unit.trim().to_string(),
        }
    }
}

impl From<NonFinite> for UnitError {
    fn from(e: NonFinite) -> Self {
        UnitError::NonPhysical {
            what: e.what,
            value: e.value,
        }
    }
}

impl From<UnitError> for PfError {
    fn from(err: UnitError) -> Self {
        match err {
            UnitError::NonPhysical { .. } => PfError::InvalidArg {
                what: err.to_string(),
            },
            _ => PfError::UnsupportedUnit {
                what: err.to_string(),
            },
        }
    }
}
