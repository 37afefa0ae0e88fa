//! Molar (mol, kmol, lbmol) and mass (g, kg, lb) amounts.
//!
//! These are the flow parts of a compound `FLOW/TIME` unit. One pound is
//! taken as 453.6 g, so 1 lbmol = 453.6 mol.

use crate::error::{UnitError, UnitResult};
use crate::normalize;
use crate::quantity::Quantity;

const GRAMS_PER_POUND: f64 = 453.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MolarUnit {
    Mol,
    Kmol,
    Lbmol,
}

impl MolarUnit {
    pub const ALL: [MolarUnit; 3] = [MolarUnit::Mol, MolarUnit::Kmol, MolarUnit::Lbmol];

    pub fn parse(unit: &str) -> UnitResult<Self> {
        Self::try_parse(unit).ok_or_else(|| UnitError::unknown(Quantity::MolarFlow, unit))
    }

    pub(crate) fn try_parse(unit: &str) -> Option<Self> {
        match normalize(unit).as_str() {
            "mol" => Some(Self::Mol),
            "kmol" => Some(Self::Kmol),
            "lbmol" => Some(Self::Lbmol),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Mol => "mol",
            Self::Kmol => "kmol",
            Self::Lbmol => "lbmol",
        }
    }

    /// Mass unit holding one molar-mass worth of this amount (kmol ↔ kg).
    pub fn mass_counterpart(&self) -> MassUnit {
        match self {
            Self::Mol => MassUnit::Gram,
            Self::Kmol => MassUnit::Kilogram,
            Self::Lbmol => MassUnit::Pound,
        }
    }

    fn moles(&self) -> f64 {
        match self {
            Self::Mol => 1.0,
            Self::Kmol => 1_000.0,
            Self::Lbmol => GRAMS_PER_POUND,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassUnit {
    Gram,
    Kilogram,
    Pound,
}

impl MassUnit {
    pub const ALL: [MassUnit; 3] = [MassUnit::Gram, MassUnit::Kilogram, MassUnit::Pound];

    pub fn parse(unit: &str) -> UnitResult<Self> {
        Self::try_parse(unit).ok_or_else(|| UnitError::unknown(Quantity::MassFlow, unit))
    }

    pub(crate) fn try_parse(unit: &str) -> Option<Self> {
        match normalize(unit).as_str() {
            "g" | "gr" => Some(Self::Gram),
            "kg" => Some(Self::Kilogram),
            "lb" => Some(Self::Pound),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Pound => "lb",
        }
    }

    /// Molar unit obtained by dividing this mass by a molar mass (kg ↔ kmol).
    pub fn molar_counterpart(&self) -> MolarUnit {
        match self {
            Self::Gram => MolarUnit::Mol,
            Self::Kilogram => MolarUnit::Kmol,
            Self::Pound => MolarUnit::Lbmol,
        }
    }

    fn grams(&self) -> f64 {
        match self {
            Self::Gram => 1.0,
            Self::Kilogram => 1_000.0,
            Self::Pound => GRAMS_PER_POUND,
        }
    }
}

/// Convert a molar amount or molar flow.
///
/// ```
/// assert_eq!(pf_units::molar_flow(1000.0, "mol", "kmol").unwrap(), 1.0);
/// ```
pub fn molar_flow(value: f64, from: &str, to: &str) -> UnitResult<f64> {
    Ok(convert_molar(value, MolarUnit::parse(from)?, MolarUnit::parse(to)?))
}

/// Convert a mass amount or mass flow.
pub fn mass_flow(value: f64, from: &str, to: &str) -> UnitResult<f64> {
    Ok(convert_mass(value, MassUnit::parse(from)?, MassUnit::parse(to)?))
}

pub(crate) fn convert_molar(v: f64, from: MolarUnit, to: MolarUnit) -> f64 {
    scale(v, from.moles(), to.moles())
}

pub(crate) fn convert_mass(v: f64, from: MassUnit, to: MassUnit) -> f64 {
    scale(v, from.grams(), to.grams())
}

fn scale(v: f64, from: f64, to: f64) -> f64 {
    if from == to {
        v
    } else if from > to {
        v * (from / to)
    } else {
        v / (to / from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn molar_factors() {
        assert_eq!(molar_flow(1000.0, "mol", "kmol").unwrap(), 1.0);
        assert_eq!(molar_flow(1.0, "lbmol", "mol").unwrap(), 453.6);
        assert!(close(molar_flow(1.0, "lbmol", "kmol").unwrap(), 0.4536));
        assert!(close(molar_flow(0.4536, "kmol", "lbmol").unwrap(), 1.0));
    }

    #[test]
    fn mass_factors() {
        assert_eq!(mass_flow(1000.0, "g", "kg").unwrap(), 1.0);
        assert_eq!(mass_flow(1.0, "gr", "g").unwrap(), 1.0);
        assert_eq!(mass_flow(1.0, "lb", "g").unwrap(), 453.6);
        assert!(close(mass_flow(1.0, "kg", "lb").unwrap(), 1.0 / 0.4536));
    }

    #[test]
    fn molar_and_mass_units_do_not_mix() {
        assert!(molar_flow(1.0, "kmol", "kg").is_err());
        assert!(mass_flow(1.0, "kmol", "kg").is_err());
    }

    #[test]
    fn counterparts_pair_up() {
        for unit in MolarUnit::ALL {
            assert_eq!(unit.mass_counterpart().molar_counterpart(), unit);
        }
    }
}
