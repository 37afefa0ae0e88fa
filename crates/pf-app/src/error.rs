//! Error types for the pf-app service layer.

use std::path::PathBuf;

use pf_ops::OpError;
use pf_streams::StreamError;
use pf_substances::SubstanceError;
use pf_units::UnitError;

/// Application error type wrapping the backend crates' errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case error: {0}")]
    Project(String),

    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Substance error: {0}")]
    Substance(#[from] SubstanceError),

    #[error("Stream error: {0}")]
    Stream(#[from] StreamError),

    #[error("Unit error: {0}")]
    Unit(#[from] UnitError),

    #[error("Flash error: {0}")]
    Flash(#[from] OpError),

    #[error("Failed to render output: {0}")]
    Output(String),
}

/// Result type for pf-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<pf_project::ProjectError> for AppError {
    fn from(err: pf_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<AppError> for pf_core::PfError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Substance(e) => e.into(),
            AppError::Stream(e) => e.into(),
            AppError::Unit(e) => e.into(),
            AppError::Flash(e) => e.into(),
            AppError::CaseFileRead { .. } => pf_core::PfError::DataUnavailable {
                what: err.to_string(),
            },
            AppError::Project(what) | AppError::Output(what) => {
                pf_core::PfError::InvalidArg { what }
            }
        }
    }
}
