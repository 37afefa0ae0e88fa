//! Running flash cases end to end.

use std::path::Path;

use pf_core::name_to_tag;
use pf_ops::{Flash, FlashConfig, FlashReport, NewtonConfig};
use pf_project::ProjectError;
use pf_project::schema::{AntoineDef, Case, SolverDef, SubstanceDef};
use pf_streams::{Parameter, Stream};
use pf_substances::{
    AntoineRecord, AntoineTable, BuiltinSource, Layered, MapSource, Substance,
    SubstanceDataSource, SubstanceRegistry,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// Outcome of one solved case, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseReport {
    pub case: String,
    pub unit: String,
    pub vapor_fraction: f64,
    pub iterations: usize,
    pub residual: f64,
    pub k_values: Vec<(String, f64)>,
    /// Inlet, vapor and liquid, in that order.
    pub streams: Vec<StreamReport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamReport {
    pub name: String,
    pub flow_rate: Parameter,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure: Option<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Parameter>,
    pub compositions: Vec<(String, f64)>,
}

impl StreamReport {
    pub fn from_stream(stream: &Stream) -> Self {
        Self {
            name: stream.name().to_string(),
            flow_rate: stream.flow_rate().clone(),
            pressure: stream.pressure().cloned(),
            temperature: stream.temperature().cloned(),
            compositions: stream
                .composition()
                .iter()
                .map(|(tag, x)| (tag.to_string(), x))
                .collect(),
        }
    }
}

impl CaseReport {
    fn new(case: &Case, flash: &Flash, report: FlashReport) -> Self {
        Self {
            case: case.name.clone(),
            unit: flash.name().to_string(),
            vapor_fraction: report.vapor_fraction,
            iterations: report.iterations,
            residual: report.residual,
            k_values: report.k_values,
            streams: [flash.inlet(), flash.vapor(), flash.liquid()]
                .into_iter()
                .map(StreamReport::from_stream)
                .collect(),
        }
    }
}

/// Data source for a case: its data files in order, then the built-in catalog.
pub fn build_source(
    case: &Case,
    base_dir: Option<&Path>,
) -> AppResult<Box<dyn SubstanceDataSource>> {
    let mut source: Box<dyn SubstanceDataSource> = Box::new(BuiltinSource);
    for file in case.data_files.iter().rev() {
        let path = match base_dir {
            Some(dir) => dir.join(file),
            None => file.into(),
        };
        debug!(path = %path.display(), "loading substance data file");
        let layer = MapSource::from_yaml_path(&path)?;
        source = Box::new(Layered::new(layer, source));
    }
    Ok(source)
}

/// Registry holding the case's substances in declaration order.
///
/// Inline substances use their own data; the rest come from `source`.
pub fn build_registry(
    case: &Case,
    source: &dyn SubstanceDataSource,
) -> AppResult<SubstanceRegistry> {
    let mut registry = SubstanceRegistry::new();
    for def in &case.substances {
        match inline_substance(def)? {
            Some(substance) => {
                registry.register(substance)?;
            }
            None => {
                registry.load_one(source, &def.name)?;
            }
        }
    }
    Ok(registry)
}

fn inline_substance(def: &SubstanceDef) -> AppResult<Option<Substance>> {
    let Some(molar_mass) = def.molar_mass else {
        return Ok(None);
    };
    let records = def
        .antoine
        .iter()
        .flatten()
        .map(|r: &AntoineDef| AntoineRecord::new(r.t_low, r.t_high, r.a, r.b, r.c))
        .collect();
    let table = AntoineTable::new(records)?;
    Ok(Some(Substance::new(def.name.trim(), molar_mass, table)?))
}

fn flash_config(solver: &SolverDef) -> FlashConfig {
    FlashConfig {
        newton: NewtonConfig {
            max_iterations: solver.max_iterations,
            tolerance: solver.tolerance,
            initial_guess: solver.initial_guess,
        },
        bounds_slack: solver.bounds_slack,
    }
}

/// Unsolved flash unit for the case's inlet.
pub fn build_flash(case: &Case, registry: &SubstanceRegistry) -> AppResult<Flash> {
    let inlet_def = &case.flash.inlet;

    let fractions = registry
        .iter()
        .map(|substance| {
            inlet_def
                .compositions
                .iter()
                .find(|(name, _)| name_to_tag(name) == substance.tag())
                .map(|(_, x)| *x)
                .ok_or_else(|| {
                    AppError::Project(format!(
                        "no inlet fraction for substance '{}'",
                        substance.name()
                    ))
                })
        })
        .collect::<AppResult<Vec<f64>>>()?;

    let inlet = Stream::new(inlet_def.name.clone(), registry.all())?
        .with_flow_rate(inlet_def.flow_rate.value, inlet_def.flow_rate.unit.clone())
        .with_compositions(fractions)?
        .with_pressure(inlet_def.pressure.value, inlet_def.pressure.unit.clone())
        .with_temperature(
            inlet_def.temperature.value,
            inlet_def.temperature.unit.clone(),
        );

    Ok(Flash::from_inlet(case.flash.name.clone(), inlet)?
        .with_config(flash_config(&case.flash.solver)))
}

/// Build and solve the case's flash.
pub fn run_case(case: &Case, source: &dyn SubstanceDataSource) -> AppResult<CaseReport> {
    info!(case = %case.name, unit = %case.flash.name, "running case");
    let registry = build_registry(case, source)?;
    let mut flash = build_flash(case, &registry)?;
    let report = flash.solve()?;
    info!(
        case = %case.name,
        vapor_fraction = report.vapor_fraction,
        iterations = report.iterations,
        "case solved"
    );
    Ok(CaseReport::new(case, &flash, report))
}

/// Read, validate and solve a case file (YAML, or JSON by extension).
pub fn run_case_file(path: &Path) -> AppResult<CaseReport> {
    let case = load_case(path)?;
    let source = build_source(&case, path.parent())?;
    run_case(&case, source.as_ref())
}

/// Read and validate a case file without solving it.
pub fn load_case(path: &Path) -> AppResult<Case> {
    pf_project::load(path).map_err(|e| match e {
        ProjectError::Io(source) => AppError::CaseFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => other.into(),
    })
}
