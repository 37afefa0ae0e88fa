//! Flow-basis changes (molar ↔ mass) and compound `FLOW/TIME` rates.

use pf_core::ensure_finite;

use crate::amount::{MassUnit, MolarUnit, convert_mass, convert_molar};
use crate::error::{UnitError, UnitResult};
use crate::quantity::Quantity;
use crate::time::{TimeUnit, convert_time};

/// One substance of a mixture as seen by a flow-basis change.
///
/// `fraction` is on the basis of the quantity being converted: mole
/// fractions when converting from a molar flow, mass fractions when
/// converting from a mass flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MixtureComponent {
    pub fraction: f64,
    /// kg/kmol (numerically g/mol)
    pub molar_mass: f64,
}

impl MixtureComponent {
    pub fn new(fraction: f64, molar_mass: f64) -> Self {
        Self {
            fraction,
            molar_mass,
        }
    }
}

/// Flow part of a unit: either molar or mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowUnit {
    Molar(MolarUnit),
    Mass(MassUnit),
}

impl FlowUnit {
    pub fn parse(unit: &str) -> UnitResult<Self> {
        if let Some(m) = MolarUnit::try_parse(unit) {
            return Ok(FlowUnit::Molar(m));
        }
        if let Some(m) = MassUnit::try_parse(unit) {
            return Ok(FlowUnit::Mass(m));
        }
        Err(UnitError::unknown(Quantity::FlowRate, unit))
    }

    /// Flow part of a `"FLOW/TIME"` rate (or of a plain amount).
    pub fn of_rate(unit: &str) -> UnitResult<Self> {
        let (flow, _) = split_rate(unit)?;
        Self::parse(flow)
    }

    pub fn is_mass(&self) -> bool {
        matches!(self, FlowUnit::Mass(_))
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            FlowUnit::Molar(m) => m.symbol(),
            FlowUnit::Mass(m) => m.symbol(),
        }
    }
}

/// Convert between flow units, changing basis through the mixture's average
/// molar mass when one side is molar and the other is mass.
///
/// Molar → mass multiplies by `Σ xᵢ·MWᵢ`; mass → molar multiplies by
/// `Σ wᵢ/MWᵢ`. Same-basis pairs ignore the mixture.
pub fn change_flow_basis(
    value: f64,
    mixture: &[MixtureComponent],
    from: &str,
    to: &str,
) -> UnitResult<f64> {
    let from_unit = FlowUnit::parse(from)?;
    let to_unit = FlowUnit::parse(to)?;

    match (from_unit, to_unit) {
        (FlowUnit::Molar(a), FlowUnit::Molar(b)) => Ok(convert_molar(value, a, b)),
        (FlowUnit::Mass(a), FlowUnit::Mass(b)) => Ok(convert_mass(value, a, b)),
        (FlowUnit::Molar(a), FlowUnit::Mass(b)) => {
            let weight = weighted_sum(mixture, from, to, |c| c.fraction * c.molar_mass)?;
            Ok(convert_mass(value * weight, a.mass_counterpart(), b))
        }
        (FlowUnit::Mass(a), FlowUnit::Molar(b)) => {
            let weight = weighted_sum(mixture, from, to, |c| c.fraction / c.molar_mass)?;
            Ok(convert_molar(value * weight, a.molar_counterpart(), b))
        }
    }
}

fn weighted_sum(
    mixture: &[MixtureComponent],
    from: &str,
    to: &str,
    term: impl Fn(&MixtureComponent) -> f64,
) -> UnitResult<f64> {
    if mixture.is_empty() {
        return Err(UnitError::EmptyMixture {
            from: from.trim().to_string(),
            to: to.trim().to_string(),
        });
    }

    for component in mixture {
        if !(component.molar_mass.is_finite() && component.molar_mass > 0.0) {
            return Err(UnitError::NonPhysical {
                what: "molar mass",
                value: component.molar_mass,
            });
        }
        ensure_finite(component.fraction, "fraction")?;
    }

    Ok(mixture.iter().map(term).sum())
}

/// Convert a flow rate given as `"FLOW/TIME"` (e.g. `"kmol/h"` → `"g/s"`).
///
/// Both sides must either carry a time part or omit it; plain amounts
/// (`"mol"` → `"kmol"`) convert with a time factor of one.
pub fn flow_rate(
    value: f64,
    mixture: &[MixtureComponent],
    from: &str,
    to: &str,
) -> UnitResult<f64> {
    let (from_flow, from_time) = split_rate(from)?;
    let (to_flow, to_time) = split_rate(to)?;

    let time_factor = match (from_time, to_time) {
        (Some(a), Some(b)) => convert_time(1.0, TimeUnit::parse(a)?, TimeUnit::parse(b)?),
        (None, None) => 1.0,
        (Some(_), None) => {
            return Err(UnitError::Malformed {
                unit: to.trim().to_string(),
                reason: "missing time part to match the source unit",
            });
        }
        (None, Some(_)) => {
            return Err(UnitError::Malformed {
                unit: from.trim().to_string(),
                reason: "missing time part to match the target unit",
            });
        }
    };

    let flow = change_flow_basis(value, mixture, from_flow, to_flow)?;
    Ok(flow / time_factor)
}

fn split_rate(unit: &str) -> UnitResult<(&str, Option<&str>)> {
    match unit.split_once('/') {
        None => Ok((unit, None)),
        Some((flow, time)) if !flow.trim().is_empty() && !time.trim().is_empty() => {
            Ok((flow, Some(time)))
        }
        Some(_) => Err(UnitError::Malformed {
            unit: unit.trim().to_string(),
            reason: "expected FLOW/TIME",
        }),
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn molar_mass_round_trip_for_pure_substance(
            v in 1e-6_f64..1e6,
            mw in 1.0_f64..500.0,
            unit in prop::sample::select(MolarUnit::ALL.to_vec()),
        ) {
            let pure = [MixtureComponent::new(1.0, mw)];
            let mass_unit = unit.mass_counterpart();
            let mass = change_flow_basis(v, &pure, unit.symbol(), mass_unit.symbol()).unwrap();
            let back = change_flow_basis(mass, &pure, mass_unit.symbol(), unit.symbol()).unwrap();
            prop_assert!((back - v).abs() <= 1e-9 * v);
        }
    }
}
