//! Stream errors.

use pf_core::PfError;
use pf_units::UnitError;
use thiserror::Error;

pub type StreamResult<T> = Result<T, StreamError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StreamError {
    /// Composition does not line up with the stream's substances.
    #[error("Invalid composition for stream '{stream}': {reason}")]
    InvalidComposition { stream: String, reason: String },

    #[error("Stream '{stream}' has no substance '{tag}'")]
    UnknownSubstance { stream: String, tag: String },

    #[error("Substance '{tag}' appears twice in stream '{stream}'")]
    DuplicateSubstance { stream: String, tag: String },

    #[error("Stream '{stream}' has no {parameter} set")]
    MissingParameter {
        stream: String,
        parameter: &'static str,
    },

    #[error(transparent)]
    Unit(#[from] UnitError),
}

impl From<StreamError> for PfError {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::Unit(e) => e.into(),
            StreamError::MissingParameter { .. } => PfError::Invariant {
                what: err.to_string(),
            },
            _ => PfError::InvalidArg {
                what: err.to_string(),
            },
        }
    }
}
