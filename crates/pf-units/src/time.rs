//! Time conversion. Months are 30 days and years 365 days.

use crate::error::{UnitError, UnitResult};
use crate::normalize;
use crate::quantity::Quantity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
    Day,
    Month,
    Year,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Month,
        TimeUnit::Year,
    ];

    pub fn parse(unit: &str) -> UnitResult<Self> {
        match normalize(unit).as_str() {
            "s" => Ok(Self::Second),
            "m" | "min" => Ok(Self::Minute),
            "h" => Ok(Self::Hour),
            "d" | "day" => Ok(Self::Day),
            "mon" | "month" => Ok(Self::Month),
            "y" | "year" => Ok(Self::Year),
            _ => Err(UnitError::unknown(Quantity::Time, unit)),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Second => "s",
            Self::Minute => "m",
            Self::Hour => "h",
            Self::Day => "d",
            Self::Month => "mon",
            Self::Year => "y",
        }
    }

    fn seconds(&self) -> f64 {
        match self {
            Self::Second => 1.0,
            Self::Minute => 60.0,
            Self::Hour => 3_600.0,
            Self::Day => 86_400.0,
            Self::Month => 2_592_000.0,
            Self::Year => 31_536_000.0,
        }
    }
}

/// Convert a time span.
///
/// ```
/// assert_eq!(pf_units::time(1.0, "y", "h").unwrap(), 8760.0);
/// ```
pub fn time(value: f64, from: &str, to: &str) -> UnitResult<f64> {
    let from = TimeUnit::parse(from)?;
    let to = TimeUnit::parse(to)?;
    Ok(convert_time(value, from, to))
}

pub(crate) fn convert_time(v: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    match (from, to) {
        _ if from == to => v,
        // Twelve months per year, not 365/30.
        (TimeUnit::Month, TimeUnit::Year) => v / 12.0,
        (TimeUnit::Year, TimeUnit::Month) => v * 12.0,
        _ if from.seconds() >= to.seconds() => v * (from.seconds() / to.seconds()),
        _ => v / (to.seconds() / from.seconds()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_factors() {
        assert_eq!(time(1.0, "h", "s").unwrap(), 3600.0);
        assert_eq!(time(3600.0, "s", "h").unwrap(), 1.0);
        assert_eq!(time(1.0, "day", "m").unwrap(), 1440.0);
        assert_eq!(time(1.0, "month", "d").unwrap(), 30.0);
        assert_eq!(time(1.0, "year", "d").unwrap(), 365.0);
        assert_eq!(time(24.0, "mon", "y").unwrap(), 2.0);
        assert_eq!(time(2.0, "y", "month").unwrap(), 24.0);
    }

    #[test]
    fn minute_aliases() {
        assert_eq!(time(2.0, "min", "s").unwrap(), 120.0);
        assert_eq!(time(2.0, "M", "s").unwrap(), 120.0);
    }

    #[test]
    fn unknown_unit_is_error() {
        assert!(matches!(
            time(1.0, "fortnight", "d"),
            Err(UnitError::UnknownUnit { .. })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn unit() -> impl Strategy<Value = TimeUnit> {
        prop::sample::select(TimeUnit::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn round_trip(v in 0.0_f64..1e9, a in unit(), b in unit()) {
            let there = time(v, a.symbol(), b.symbol()).unwrap();
            let back = time(there, b.symbol(), a.symbol()).unwrap();
            prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
        }

        #[test]
        fn identity(v in -1e9_f64..1e9, a in unit()) {
            prop_assert_eq!(time(v, a.symbol(), a.symbol()).unwrap(), v);
        }
    }
}
