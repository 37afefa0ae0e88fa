//! Flash solve: K-values, Rachford-Rice root, outlet post-processing.

use pf_streams::Stream;
use pf_substances::vapor_pressure_bar;
use pf_units::pressure;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::rachford_rice::RachfordRice;
use crate::error::{OpError, OpResult};
use crate::newton::{NewtonConfig, newton_solve};
use crate::traits::UnitOperation;

/// Flash solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashConfig {
    #[serde(flatten)]
    pub newton: NewtonConfig,
    /// How far outside `[0, 1]` a converged vapor fraction may land.
    pub bounds_slack: f64,
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            newton: NewtonConfig::default(),
            bounds_slack: 1e-9,
        }
    }
}

/// Result of a converged flash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlashReport {
    /// Vapor-to-feed molar ratio `r`.
    pub vapor_fraction: f64,
    /// `(substance tag, K)` in inlet substance order.
    pub k_values: Vec<(String, f64)>,
    pub iterations: usize,
    /// Rachford-Rice residual at the root.
    pub residual: f64,
}

/// Isothermal two-phase flash with ideal (Raoult's law) K-values.
///
/// The inlet needs pressure and temperature; the vapor outlet must not carry a
/// pressure and the liquid outlet must not carry a temperature. Outlet
/// pressure and temperature are never written, so solving again after
/// changing the inlet stays valid.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlashSolver {
    config: FlashConfig,
}

impl FlashSolver {
    pub fn new(config: FlashConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FlashConfig {
        &self.config
    }

    /// Solve for the vapor fraction and write flows and compositions into the
    /// outlets. Outlets are untouched when an error is returned.
    pub fn flash(
        &self,
        inlet: &Stream,
        vapor: &mut Stream,
        liquid: &mut Stream,
    ) -> OpResult<FlashReport> {
        check_specification(inlet, vapor, liquid)?;

        let k_values = k_values(inlet)?;
        let z = inlet.composition().values();
        let k: Vec<f64> = k_values.iter().map(|(_, k)| *k).collect();
        let rr = RachfordRice::new(&z, &k);

        let solution = newton_solve(
            |r| rr.residual(r),
            |r| rr.derivative(r),
            &self.config.newton,
        )
        .inspect_err(|e| warn!(stream = inlet.name(), error = %e, "flash did not converge"))?;

        let r = solution.root;
        let slack = self.config.bounds_slack;
        if !(-slack..=1.0 + slack).contains(&r) {
            warn!(stream = inlet.name(), vapor_fraction = r, "flash root outside [0, 1]");
            return Err(OpError::Convergence {
                what: format!(
                    "vapor fraction {r} is outside [0, 1]; the feed does not split into two phases"
                ),
            });
        }

        let feed = inlet.flow_rate();
        let vapor_flow = r * feed.value();
        vapor.set_flow_rate(vapor_flow, feed.unit());
        liquid.set_flow_rate(feed.value() - vapor_flow, feed.unit());

        for ((tag, _), (y, x)) in k_values
            .iter()
            .zip(rr.vapor(r).into_iter().zip(rr.liquid(r)))
        {
            vapor.set_composition(tag, y)?;
            liquid.set_composition(tag, x)?;
        }

        debug!(
            stream = inlet.name(),
            vapor_fraction = r,
            iterations = solution.iterations,
            residual = solution.residual,
            "flash converged"
        );

        Ok(FlashReport {
            vapor_fraction: r,
            k_values,
            iterations: solution.iterations,
            residual: solution.residual,
        })
    }
}

impl UnitOperation for FlashSolver {
    type Report = FlashReport;

    fn name(&self) -> &str {
        "flash"
    }

    fn outlet_count(&self) -> usize {
        2
    }

    /// Outlets are `[vapor, liquid]`.
    fn solve(&self, inlet: &Stream, outlets: &mut [Stream]) -> OpResult<FlashReport> {
        match outlets {
            [vapor, liquid] => self.flash(inlet, vapor, liquid),
            _ => Err(OpError::OutletCount {
                unit: inlet.name().to_string(),
                expected: self.outlet_count(),
                got: outlets.len(),
            }),
        }
    }
}

fn check_specification(inlet: &Stream, vapor: &Stream, liquid: &Stream) -> OpResult<()> {
    let unsupported = |what: &str| OpError::UnsupportedFlashSpecification {
        unit: inlet.name().to_string(),
        what: what.to_string(),
    };

    if inlet.pressure().is_none() {
        return Err(unsupported("inlet pressure is not set"));
    }
    if inlet.temperature().is_none() {
        return Err(unsupported("inlet temperature is not set"));
    }
    if vapor.pressure().is_some() {
        return Err(unsupported("vapor outlet pressure must be left unset"));
    }
    if liquid.temperature().is_some() {
        return Err(unsupported("liquid outlet temperature must be left unset"));
    }
    if !inlet.has_same_substances(vapor) || !inlet.has_same_substances(liquid) {
        return Err(unsupported("outlets must carry the inlet's substances"));
    }
    if inlet.substances().is_empty() {
        return Err(unsupported("inlet has no substances"));
    }
    Ok(())
}

/// `Kᵢ = Psᵢ / P`, with `Psᵢ` converted into the inlet pressure unit.
fn k_values(inlet: &Stream) -> OpResult<Vec<(String, f64)>> {
    let t_k = inlet.temperature_in("K")?;
    let (p, p_unit) = match inlet.pressure() {
        Some(p) => (p.value(), p.unit()),
        None => {
            return Err(OpError::UnsupportedFlashSpecification {
                unit: inlet.name().to_string(),
                what: "inlet pressure is not set".to_string(),
            });
        }
    };
    if !(p.is_finite() && p > 0.0) {
        return Err(OpError::UnsupportedFlashSpecification {
            unit: inlet.name().to_string(),
            what: format!("inlet pressure must be positive, got {p} {p_unit}"),
        });
    }

    inlet
        .substances()
        .iter()
        .map(|s| -> OpResult<(String, f64)> {
            let ps_bar = vapor_pressure_bar(s, t_k)?;
            let ps = pressure(ps_bar, "bar", p_unit)?;
            Ok((s.tag().to_string(), ps / p))
        })
        .collect()
}
