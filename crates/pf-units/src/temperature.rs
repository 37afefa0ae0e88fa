//! Temperature conversion among K, C, F and R.

use crate::error::{UnitError, UnitResult};
use crate::normalize;
use crate::quantity::Quantity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 4] = [
        TemperatureUnit::Kelvin,
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Rankine,
    ];

    pub fn parse(unit: &str) -> UnitResult<Self> {
        match normalize(unit).as_str() {
            "k" | "kelvin" => Ok(Self::Kelvin),
            "c" | "°c" | "celsius" => Ok(Self::Celsius),
            "f" | "°f" | "fahrenheit" => Ok(Self::Fahrenheit),
            "r" | "°r" | "rankine" => Ok(Self::Rankine),
            _ => Err(UnitError::unknown(Quantity::Temperature, unit)),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Kelvin => "K",
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
            Self::Rankine => "R",
        }
    }
}

/// Convert a temperature between K, C, F and R.
///
/// ```
/// assert_eq!(pf_units::temperature(80.0, "C", "F").unwrap(), 176.0);
/// ```
pub fn temperature(value: f64, from: &str, to: &str) -> UnitResult<f64> {
    let from = TemperatureUnit::parse(from)?;
    let to = TemperatureUnit::parse(to)?;
    Ok(convert_temperature(value, from, to))
}

pub(crate) fn convert_temperature(v: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    use TemperatureUnit::*;

    match (from, to) {
        (Celsius, Fahrenheit) => v * 9.0 / 5.0 + 32.0,
        (Celsius, Kelvin) => v + 273.15,
        (Celsius, Rankine) => v * 9.0 / 5.0 + 32.0 + 459.67,
        (Fahrenheit, Celsius) => (v - 32.0) * 5.0 / 9.0,
        (Fahrenheit, Kelvin) => (v - 32.0) * 5.0 / 9.0 + 273.15,
        (Fahrenheit, Rankine) => v + 459.67,
        (Kelvin, Celsius) => v - 273.15,
        (Kelvin, Fahrenheit) => (v - 273.15) * 9.0 / 5.0 + 32.0,
        (Kelvin, Rankine) => v * 9.0 / 5.0,
        (Rankine, Celsius) => (v - 491.67) * 5.0 / 9.0,
        (Rankine, Fahrenheit) => v - 459.67,
        (Rankine, Kelvin) => v * 5.0 / 9.0,
        (Kelvin, Kelvin)
        | (Celsius, Celsius)
        | (Fahrenheit, Fahrenheit)
        | (Rankine, Rankine) => v,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn unit() -> impl Strategy<Value = TemperatureUnit> {
        prop::sample::select(TemperatureUnit::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn round_trip(v in -500.0_f64..5000.0, a in unit(), b in unit()) {
            let there = temperature(v, a.symbol(), b.symbol()).unwrap();
            let back = temperature(there, b.symbol(), a.symbol()).unwrap();
            prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn identity(v in -1e6_f64..1e6, a in unit()) {
            prop_assert_eq!(temperature(v, a.symbol(), a.symbol()).unwrap(), v);
        }
    }
}
