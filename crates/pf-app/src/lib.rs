//! Shared application service layer for procflow.
//!
//! Turns case files into registries, streams and solved flash units, and
//! answers the one-off substance and unit queries the CLI exposes.

pub mod case_service;
pub mod error;
pub mod substance_service;

pub use case_service::{
    CaseReport, StreamReport, build_flash, build_registry, build_source, load_case, run_case,
    run_case_file,
};
pub use error::{AppError, AppResult};
pub use substance_service::{SubstanceSummary, list_substances, vapor_pressure};
