//! Case schema definitions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const LATEST_VERSION: u32 = 1;

/// One flash separation with its substances and feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Case {
    pub version: u32,
    pub name: String,
    /// Extra substance data files, YAML, consulted before the built-in catalog.
    /// Relative paths resolve against the case file's directory.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data_files: Vec<String>,
    pub substances: Vec<SubstanceDef>,
    pub flash: FlashDef,
}

/// A substance by name, optionally with inline data.
///
/// Without `molar_mass` the substance is looked up in the data files and the
/// built-in catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubstanceDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub molar_mass: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antoine: Option<Vec<AntoineDef>>,
}

impl SubstanceDef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            molar_mass: None,
            antoine: None,
        }
    }

    pub fn is_inline(&self) -> bool {
        self.molar_mass.is_some()
    }
}

/// Antoine coefficients: `log10(P/bar) = a - b/(c + T/K)` on `[t_low, t_high]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AntoineDef {
    pub t_low: f64,
    pub t_high: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FlashDef {
    pub name: String,
    pub inlet: InletDef,
    #[serde(default)]
    pub solver: SolverDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InletDef {
    #[serde(default = "InletDef::default_name")]
    pub name: String,
    pub flow_rate: ValueDef,
    pub pressure: ValueDef,
    pub temperature: ValueDef,
    /// Mole fractions keyed by substance name.
    pub compositions: BTreeMap<String, f64>,
}

impl InletDef {
    fn default_name() -> String {
        "Feed".to_string()
    }
}

/// A value with a unit token, e.g. `{value: 200, unit: kPa}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValueDef {
    pub value: f64,
    pub unit: String,
}

impl ValueDef {
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SolverDef {
    pub max_iterations: usize,
    pub tolerance: f64,
    pub initial_guess: f64,
    pub bounds_slack: f64,
}

impl Default for SolverDef {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance: 1.48e-8,
            initial_guess: 0.5,
            bounds_slack: 1e-9,
        }
    }
}
