//! Quantity families and a single dispatching entry point.

use std::fmt;

use crate::error::UnitResult;
use crate::{flow, mass_flow, molar_flow, pressure, temperature, time};

/// Dimension/quantity family a unit token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Temperature,
    Pressure,
    Time,
    MolarFlow,
    MassFlow,
    /// Compound `FLOW/TIME` rate without a basis change.
    FlowRate,
}

impl Quantity {
    pub const ALL: [Quantity; 6] = [
        Quantity::Temperature,
        Quantity::Pressure,
        Quantity::Time,
        Quantity::MolarFlow,
        Quantity::MassFlow,
        Quantity::FlowRate,
    ];
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Pressure => write!(f, "pressure"),
            Self::Time => write!(f, "time"),
            Self::MolarFlow => write!(f, "molar flow"),
            Self::MassFlow => write!(f, "mass flow"),
            Self::FlowRate => write!(f, "flow rate"),
        }
    }
}

impl std::str::FromStr for Quantity {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "temperature" | "t" => Ok(Quantity::Temperature),
            "pressure" | "p" => Ok(Quantity::Pressure),
            "time" => Ok(Quantity::Time),
            "molar" | "molar_flow" => Ok(Quantity::MolarFlow),
            "mass" | "mass_flow" => Ok(Quantity::MassFlow),
            "flow" | "flow_rate" => Ok(Quantity::FlowRate),
            _ => Err("unknown quantity"),
        }
    }
}

/// Convert `value` between two units of the given quantity.
///
/// `FlowRate` conversions run without mixture data, so they fail with
/// [`crate::UnitError::EmptyMixture`] when a molar/mass basis change is needed.
pub fn convert(quantity: Quantity, value: f64, from: &str, to: &str) -> UnitResult<f64> {
    match quantity {
        Quantity::Temperature => temperature(value, from, to),
        Quantity::Pressure => pressure(value, from, to),
        Quantity::Time => time(value, from, to),
        Quantity::MolarFlow => molar_flow(value, from, to),
        Quantity::MassFlow => mass_flow(value, from, to),
        Quantity::FlowRate => flow::flow_rate(value, &[], from, to),
    }
}
