//! Case validation logic.

use std::collections::HashSet;

use pf_core::name_to_tag;

use crate::schema::{Case, LATEST_VERSION, SolverDef, SubstanceDef, ValueDef};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate substance: {tag}")]
    DuplicateSubstance { tag: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: impl Into<String>, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.into(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_case(case: &Case) -> Result<(), ValidationError> {
    if case.version == 0 || case.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: case.version,
        });
    }
    if case.name.trim().is_empty() {
        return Err(invalid("name", "", "must not be empty"));
    }
    if case.substances.is_empty() {
        return Err(invalid("substances", "[]", "at least one substance is required"));
    }

    let mut tags = HashSet::new();
    for substance in &case.substances {
        validate_substance(substance)?;
        let tag = name_to_tag(&substance.name);
        if !tags.insert(tag.clone()) {
            return Err(ValidationError::DuplicateSubstance { tag });
        }
    }

    let flash = &case.flash;
    if flash.name.trim().is_empty() {
        return Err(invalid("flash.name", "", "must not be empty"));
    }
    validate_value("flash.inlet.flow_rate", &flash.inlet.flow_rate)?;
    validate_value("flash.inlet.pressure", &flash.inlet.pressure)?;
    validate_value("flash.inlet.temperature", &flash.inlet.temperature)?;
    if flash.inlet.flow_rate.value < 0.0 {
        return Err(invalid(
            "flash.inlet.flow_rate",
            flash.inlet.flow_rate.value,
            "must not be negative",
        ));
    }
    if flash.inlet.pressure.value <= 0.0 {
        return Err(invalid(
            "flash.inlet.pressure",
            flash.inlet.pressure.value,
            "must be positive",
        ));
    }

    let mut seen = HashSet::new();
    for (name, fraction) in &flash.inlet.compositions {
        let tag = name_to_tag(name);
        if !tags.contains(&tag) {
            return Err(ValidationError::MissingReference {
                id: name.clone(),
                context: "flash.inlet.compositions".to_string(),
            });
        }
        if !seen.insert(tag) {
            return Err(ValidationError::DuplicateSubstance { tag: name_to_tag(name) });
        }
        if !fraction.is_finite() || *fraction < 0.0 {
            return Err(invalid(
                format!("flash.inlet.compositions.{name}"),
                fraction,
                "must be a finite, non-negative mole fraction",
            ));
        }
    }
    for substance in &case.substances {
        if !seen.contains(&name_to_tag(&substance.name)) {
            return Err(ValidationError::MissingReference {
                id: substance.name.clone(),
                context: "flash.inlet.compositions (no fraction given)".to_string(),
            });
        }
    }

    validate_solver(&flash.solver)
}

fn validate_substance(substance: &SubstanceDef) -> Result<(), ValidationError> {
    let field = format!("substances.{}", substance.name);
    if substance.name.trim().is_empty() {
        return Err(invalid("substances.name", "", "must not be empty"));
    }
    if let Some(mw) = substance.molar_mass {
        if !(mw.is_finite() && mw > 0.0) {
            return Err(invalid(format!("{field}.molar_mass"), mw, "must be positive"));
        }
    } else if substance.antoine.is_some() {
        return Err(invalid(
            format!("{field}.antoine"),
            "given",
            "inline Antoine data needs a molar_mass",
        ));
    }
    for record in substance.antoine.iter().flatten() {
        let values = [record.t_low, record.t_high, record.a, record.b, record.c];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(invalid(format!("{field}.antoine"), "NaN/inf", "must be finite"));
        }
        if record.t_low > record.t_high {
            return Err(invalid(
                format!("{field}.antoine"),
                format!("[{}, {}]", record.t_low, record.t_high),
                "t_low must not exceed t_high",
            ));
        }
    }
    Ok(())
}

fn validate_value(field: &str, value: &ValueDef) -> Result<(), ValidationError> {
    if !value.value.is_finite() {
        return Err(invalid(field, value.value, "must be finite"));
    }
    if value.unit.trim().is_empty() {
        return Err(invalid(format!("{field}.unit"), "", "must not be empty"));
    }
    Ok(())
}

fn validate_solver(solver: &SolverDef) -> Result<(), ValidationError> {
    if solver.max_iterations == 0 {
        return Err(invalid("flash.solver.max_iterations", 0, "must be positive"));
    }
    if !(solver.tolerance.is_finite() && solver.tolerance > 0.0) {
        return Err(invalid(
            "flash.solver.tolerance",
            solver.tolerance,
            "must be positive",
        ));
    }
    if !solver.initial_guess.is_finite() {
        return Err(invalid(
            "flash.solver.initial_guess",
            solver.initial_guess,
            "must be finite",
        ));
    }
    if !(solver.bounds_slack.is_finite() && solver.bounds_slack >= 0.0) {
        return Err(invalid(
            "flash.solver.bounds_slack",
            solver.bounds_slack,
            "must not be negative",
        ));
    }
    Ok(())
}
