//! Named `(value, unit)` pairs carried by streams.

use std::fmt;

use pf_core::name_to_tag;
use pf_units::{Quantity, UnitResult, convert};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    FlowRate,
    Pressure,
    Temperature,
    Other,
}

impl ParameterKind {
    /// Unit family used to convert values of this kind, if any.
    ///
    /// Flow rates need mixture data for a basis change, so they are converted
    /// through the owning stream instead.
    pub fn quantity(&self) -> Option<Quantity> {
        match self {
            ParameterKind::Pressure => Some(Quantity::Pressure),
            ParameterKind::Temperature => Some(Quantity::Temperature),
            ParameterKind::FlowRate | ParameterKind::Other => None,
        }
    }
}

/// A stream property with a unit token.
///
/// Each stream owns its own parameters; solvers overwrite value and unit by
/// assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    name: String,
    tag: String,
    value: f64,
    unit: String,
    kind: ParameterKind,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        value: f64,
        unit: impl Into<String>,
        kind: ParameterKind,
    ) -> Self {
        let name = name.into();
        Self {
            tag: name_to_tag(&name),
            name,
            value,
            unit: unit.into(),
            kind,
        }
    }

    pub fn flow_rate(value: f64, unit: impl Into<String>) -> Self {
        Self::new("Flow Rate", value, unit, ParameterKind::FlowRate)
    }

    pub fn pressure(value: f64, unit: impl Into<String>) -> Self {
        Self::new("Pressure", value, unit, ParameterKind::Pressure)
    }

    pub fn temperature(value: f64, unit: impl Into<String>) -> Self {
        Self::new("Temperature", value, unit, ParameterKind::Temperature)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind
    }

    pub fn set(&mut self, value: f64, unit: impl Into<String>) {
        self.value = value;
        self.unit = unit.into();
    }

    /// Value expressed in `unit`, for pressure and temperature parameters.
    ///
    /// Other kinds only answer for their own unit token.
    pub fn value_in(&self, unit: &str) -> UnitResult<f64> {
        match self.kind.quantity() {
            Some(quantity) => convert(quantity, self.value, &self.unit, unit),
            None => convert(Quantity::FlowRate, self.value, &self.unit, unit),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {} {}", self.name, self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind_and_tag() {
        let p = Parameter::pressure(200.0, "kPa");
        assert_eq!(p.kind(), ParameterKind::Pressure);
        assert_eq!(p.tag(), "pressure");
        let f = Parameter::flow_rate(1000.0, "kmol/h");
        assert_eq!(f.tag(), "flow+rate");
        assert_eq!(f.to_string(), "Flow Rate = 1000 kmol/h");
    }

    #[test]
    fn set_replaces_value_and_unit() {
        let mut t = Parameter::temperature(50.0, "C");
        t.set(323.15, "K");
        assert_eq!(t.value(), 323.15);
        assert_eq!(t.unit(), "K");
    }

    #[test]
    fn value_in_converts_by_kind() {
        let t = Parameter::temperature(50.0, "C");
        assert!((t.value_in("K").unwrap() - 323.15).abs() < 1e-9);
        let p = Parameter::pressure(200.0, "kPa");
        assert!((p.value_in("bar").unwrap() - 2.0).abs() < 1e-12);
        let f = Parameter::flow_rate(1.0, "kmol/h");
        assert!((f.value_in("mol/h").unwrap() - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn serializes_kind_in_snake_case() {
        let json = serde_json::to_string(&Parameter::flow_rate(1.0, "kg/s")).unwrap();
        assert!(json.contains("\"flow_rate\""), "{json}");
    }
}
