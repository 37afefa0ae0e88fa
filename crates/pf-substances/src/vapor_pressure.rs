//! Saturation vapor pressure from a substance's Antoine table.
//!
//! Evaluation never extrapolates: a temperature outside every tabulated range
//! is an [`SubstanceError::OutOfRange`] error.

use pf_core::ensure_finite;
use pf_core::units::{Pressure, Temperature, bar, in_kelvin};

use crate::error::{SubstanceError, SubstanceResult};
use crate::substance::Substance;

/// Saturation pressure [bar] of `substance` at `t_kelvin`.
pub fn vapor_pressure_bar(substance: &Substance, t_kelvin: f64) -> SubstanceResult<f64> {
    ensure_finite(t_kelvin, "temperature")?;

    let p = substance
        .antoine()
        .vapor_pressure_bar(t_kelvin)
        .ok_or_else(|| SubstanceError::OutOfRange {
            substance: substance.tag().to_string(),
            temperature_k: t_kelvin,
        })?;

    let p = ensure_finite(p, "vapor pressure")?;
    if p <= 0.0 {
        return Err(SubstanceError::NonPhysical {
            what: "vapor pressure",
            value: p,
        });
    }

    Ok(p)
}

/// Saturation pressure of `substance` at `temperature`.
pub fn vapor_pressure(substance: &Substance, temperature: Temperature) -> SubstanceResult<Pressure> {
    vapor_pressure_bar(substance, in_kelvin(temperature)).map(bar)
}
