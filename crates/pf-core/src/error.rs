use thiserror::Error;

pub type PfResult<T> = Result<T, PfError>;

/// Workspace-wide error every crate-local error converts into.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Unsupported unit: {what}")]
    UnsupportedUnit { what: String },

    #[error("Out of range: {what}")]
    OutOfRange { what: String },

    #[error("Data unavailable: {what}")]
    DataUnavailable { what: String },

    #[error("Convergence failed: {what}")]
    Convergence { what: String },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
