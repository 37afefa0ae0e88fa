//! Error types for unit operations.

use pf_core::{NonFinite, PfError};
use pf_streams::StreamError;
use pf_substances::SubstanceError;
use pf_units::UnitError;
use thiserror::Error;

/// Errors that can occur while solving a unit operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpError {
    /// Streams are not specified the way the operation needs them.
    #[error("Unsupported specification for '{unit}': {what}")]
    UnsupportedFlashSpecification { unit: String, what: String },

    #[error("Convergence failed: {what}")]
    Convergence { what: String },

    #[error("'{unit}' takes {expected} outlet streams, got {got}")]
    OutletCount {
        unit: String,
        expected: usize,
        got: usize,
    },

    #[error("Substance error: {0}")]
    Substance(#[from] SubstanceError),

    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),

    #[error("Stream error: {0}")]
    Stream(#[from] StreamError),
}

pub type OpResult<T> = Result<T, OpError>;

impl From<NonFinite> for OpError {
    fn from(e: NonFinite) -> Self {
        OpError::Convergence {
            what: e.to_string(),
        }
    }
}

impl From<OpError> for PfError {
    fn from(e: OpError) -> Self {
        match e {
            OpError::Substance(e) => e.into(),
            OpError::Unit(e) => e.into(),
            OpError::Stream(e) => e.into(),
            OpError::Convergence { .. } => PfError::Convergence {
                what: e.to_string(),
            },
            OpError::UnsupportedFlashSpecification { .. } | OpError::OutletCount { .. } => {
                PfError::InvalidArg {
                    what: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = OpError::UnsupportedFlashSpecification {
            unit: "V-101".into(),
            what: "inlet temperature is not set".into(),
        };
        assert!(err.to_string().contains("V-101"));
        assert!(err.to_string().contains("temperature"));
    }

    #[test]
    fn error_conversion() {
        let err: PfError = OpError::Convergence {
            what: "derivative vanished".into(),
        }
        .into();
        assert!(matches!(err, PfError::Convergence { .. }));

        let err: PfError = OpError::from(SubstanceError::OutOfRange {
            substance: "n-hexane".into(),
            temperature_k: 400.0,
        })
        .into();
        assert!(matches!(err, PfError::OutOfRange { .. }));
    }
}
