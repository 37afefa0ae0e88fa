//! pf-project: flash case file format and validation.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_case};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ProjectError> for pf_core::PfError {
    fn from(e: ProjectError) -> Self {
        match e {
            ProjectError::Io(_) => pf_core::PfError::DataUnavailable {
                what: e.to_string(),
            },
            _ => pf_core::PfError::InvalidArg {
                what: e.to_string(),
            },
        }
    }
}

pub fn parse_yaml(content: &str) -> ProjectResult<Case> {
    let case: Case = serde_yaml::from_str(content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn load_yaml(path: &Path) -> ProjectResult<Case> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn save_yaml(path: &Path, case: &Case) -> ProjectResult<()> {
    validate_case(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn parse_json(content: &str) -> ProjectResult<Case> {
    let case: Case = serde_json::from_str(content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn load_json(path: &Path) -> ProjectResult<Case> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

pub fn save_json(path: &Path, case: &Case) -> ProjectResult<()> {
    validate_case(case)?;
    let content = serde_json::to_string_pretty(case)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Whether `path` names a JSON case; anything else is read as YAML.
pub fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load by extension.
pub fn load(path: &Path) -> ProjectResult<Case> {
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}
