//! Process streams.

use std::sync::Arc;

use pf_core::name_to_tag;
use pf_substances::Substance;
use pf_units::{FlowUnit, MixtureComponent, flow_rate};

use crate::composition::Composition;
use crate::error::{StreamError, StreamResult};
use crate::parameter::Parameter;

/// Default unit of a new stream's flow rate.
pub const DEFAULT_FLOW_UNIT: &str = "kmol/h";

/// Material flowing between unit operations.
///
/// The composition always has exactly one entry per substance, in substance
/// order. Pressure and temperature start unset.
#[derive(Debug, Clone, PartialEq)]
pub struct Stream {
    name: String,
    tag: String,
    substances: Vec<Arc<Substance>>,
    composition: Composition,
    flow_rate: Parameter,
    pressure: Option<Parameter>,
    temperature: Option<Parameter>,
}

impl Stream {
    /// A stream of `substances` with zero flow and zero fractions.
    pub fn new(name: impl Into<String>, substances: Vec<Arc<Substance>>) -> StreamResult<Self> {
        let name = name.into();
        for (i, s) in substances.iter().enumerate() {
            if substances[..i].iter().any(|prev| prev.tag() == s.tag()) {
                return Err(StreamError::DuplicateSubstance {
                    stream: name,
                    tag: s.tag().to_string(),
                });
            }
        }

        Ok(Self {
            tag: name_to_tag(&name),
            composition: Composition::zeros(substances.iter().map(|s| s.tag())),
            substances,
            flow_rate: Parameter::flow_rate(0.0, DEFAULT_FLOW_UNIT),
            pressure: None,
            temperature: None,
            name,
        })
    }

    pub fn with_flow_rate(mut self, value: f64, unit: impl Into<String>) -> Self {
        self.set_flow_rate(value, unit);
        self
    }

    /// Mole fractions in substance order.
    pub fn with_compositions(mut self, fractions: Vec<f64>) -> StreamResult<Self> {
        if fractions.len() != self.substances.len() {
            return Err(StreamError::InvalidComposition {
                stream: self.name,
                reason: format!(
                    "expected {} fractions, got {}",
                    self.substances.len(),
                    fractions.len()
                ),
            });
        }
        if let Some(bad) = fractions.iter().find(|x| !x.is_finite()) {
            return Err(StreamError::InvalidComposition {
                stream: self.name,
                reason: format!("non-finite fraction {bad}"),
            });
        }

        for (substance, x) in self.substances.iter().zip(fractions) {
            self.composition.set(substance.tag(), x);
        }
        Ok(self)
    }

    pub fn with_pressure(mut self, value: f64, unit: impl Into<String>) -> Self {
        self.set_pressure(value, unit);
        self
    }

    pub fn with_temperature(mut self, value: f64, unit: impl Into<String>) -> Self {
        self.set_temperature(value, unit);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn substances(&self) -> &[Arc<Substance>] {
        &self.substances
    }

    pub fn substance_names(&self) -> impl Iterator<Item = &str> {
        self.substances.iter().map(|s| s.name())
    }

    pub fn substance_tags(&self) -> impl Iterator<Item = &str> {
        self.substances.iter().map(|s| s.tag())
    }

    /// Whether both streams carry the same set of substance tags, in any order.
    pub fn has_same_substances(&self, other: &Stream) -> bool {
        self.substances.len() == other.substances.len()
            && self
                .substance_tags()
                .all(|tag| other.substance_tags().any(|t| t == tag))
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn flow_rate(&self) -> &Parameter {
        &self.flow_rate
    }

    pub fn pressure(&self) -> Option<&Parameter> {
        self.pressure.as_ref()
    }

    pub fn temperature(&self) -> Option<&Parameter> {
        self.temperature.as_ref()
    }

    pub fn set_flow_rate(&mut self, value: f64, unit: impl Into<String>) {
        self.flow_rate.set(value, unit);
    }

    pub fn set_pressure(&mut self, value: f64, unit: impl Into<String>) {
        match &mut self.pressure {
            Some(p) => p.set(value, unit),
            None => self.pressure = Some(Parameter::pressure(value, unit)),
        }
    }

    pub fn set_temperature(&mut self, value: f64, unit: impl Into<String>) {
        match &mut self.temperature {
            Some(t) => t.set(value, unit),
            None => self.temperature = Some(Parameter::temperature(value, unit)),
        }
    }

    pub fn clear_pressure(&mut self) {
        self.pressure = None;
    }

    pub fn clear_temperature(&mut self) {
        self.temperature = None;
    }

    /// Overwrite the mole fraction of the substance tagged `tag`.
    pub fn set_composition(&mut self, tag: &str, value: f64) -> StreamResult<()> {
        if self.composition.set(tag, value) {
            Ok(())
        } else {
            Err(StreamError::UnknownSubstance {
                stream: self.name.clone(),
                tag: tag.to_string(),
            })
        }
    }

    /// `(fraction, molar mass)` per substance, on the basis of the stream's
    /// flow unit: mole fractions for a molar flow, mass fractions
    /// `wᵢ = xᵢ·MWᵢ / Σ xⱼ·MWⱼ` for a mass flow.
    pub fn mixture_basis(&self) -> StreamResult<Vec<MixtureComponent>> {
        let molar: Vec<MixtureComponent> = self
            .substances
            .iter()
            .zip(self.composition.values())
            .map(|(s, x)| MixtureComponent::new(x, s.molar_mass()))
            .collect();

        if !FlowUnit::of_rate(self.flow_rate.unit())?.is_mass() {
            return Ok(molar);
        }

        let total: f64 = molar.iter().map(|c| c.fraction * c.molar_mass).sum();
        if total <= 0.0 {
            return Err(StreamError::InvalidComposition {
                stream: self.name.clone(),
                reason: "no mass in the composition for a mass flow".to_string(),
            });
        }
        Ok(molar
            .into_iter()
            .map(|c| MixtureComponent::new(c.fraction * c.molar_mass / total, c.molar_mass))
            .collect())
    }

    /// Flow rate converted to `unit`, changing basis through the composition.
    pub fn flow_rate_in(&self, unit: &str) -> StreamResult<f64> {
        Ok(flow_rate(
            self.flow_rate.value(),
            &self.mixture_basis()?,
            self.flow_rate.unit(),
            unit,
        )?)
    }

    pub fn pressure_in(&self, unit: &str) -> StreamResult<f64> {
        let p = self.pressure.as_ref().ok_or_else(|| self.missing("pressure"))?;
        Ok(p.value_in(unit)?)
    }

    pub fn temperature_in(&self, unit: &str) -> StreamResult<f64> {
        let t = self
            .temperature
            .as_ref()
            .ok_or_else(|| self.missing("temperature"))?;
        Ok(t.value_in(unit)?)
    }

    fn missing(&self, parameter: &'static str) -> StreamError {
        StreamError::MissingParameter {
            stream: self.name.clone(),
            parameter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_substances::{BuiltinSource, SubstanceRegistry};

    fn feed() -> Stream {
        let registry = SubstanceRegistry::load(&BuiltinSource, ["Propane", "n-Hexane"]).unwrap();
        Stream::new("Feed", registry.all()).unwrap()
    }

    #[test]
    fn new_stream_defaults() {
        let s = feed();
        assert_eq!(s.tag(), "feed");
        assert_eq!(s.flow_rate().value(), 0.0);
        assert_eq!(s.flow_rate().unit(), DEFAULT_FLOW_UNIT);
        assert_eq!(s.composition().values(), vec![0.0, 0.0]);
        assert!(s.pressure().is_none());
        assert!(s.temperature().is_none());
        assert_eq!(s.substance_names().collect::<Vec<_>>(), vec!["Propane", "n-Hexane"]);
    }

    #[test]
    fn builders_fill_state() {
        let s = feed()
            .with_flow_rate(100.0, "kmol/h")
            .with_compositions(vec![0.4, 0.6])
            .unwrap()
            .with_pressure(2.0, "bar")
            .with_temperature(50.0, "C");

        assert_eq!(s.composition().get("propane"), Some(0.4));
        assert_eq!(s.composition().get("n-hexane"), Some(0.6));
        assert_eq!(s.pressure().map(|p| p.unit()), Some("bar"));
        assert!((s.temperature_in("K").unwrap() - 323.15).abs() < 1e-9);
        assert!((s.pressure_in("kPa").unwrap() - 200.0).abs() < 1e-9);
    }

    #[test]
    fn composition_length_must_match() {
        let err = feed().with_compositions(vec![1.0]).unwrap_err();
        assert!(matches!(err, StreamError::InvalidComposition { .. }));
    }

    #[test]
    fn set_composition_rejects_unknown_tag() {
        let mut s = feed();
        s.set_composition("propane", 0.25).unwrap();
        assert_eq!(s.composition().get("propane"), Some(0.25));
        assert!(matches!(
            s.set_composition("water", 0.1),
            Err(StreamError::UnknownSubstance { .. })
        ));
    }

    #[test]
    fn duplicate_substances_are_rejected() {
        let registry = SubstanceRegistry::load(&BuiltinSource, ["Water"]).unwrap();
        let water = registry.require("water").unwrap();
        let err = Stream::new("Bad", vec![water.clone(), water]).unwrap_err();
        assert!(matches!(err, StreamError::DuplicateSubstance { .. }));
    }

    #[test]
    fn missing_pressure_is_reported() {
        assert!(matches!(
            feed().pressure_in("bar"),
            Err(StreamError::MissingParameter {
                parameter: "pressure",
                ..
            })
        ));
    }

    #[test]
    fn flow_rate_in_mass_basis() {
        let s = feed()
            .with_flow_rate(1.0, "kmol/h")
            .with_compositions(vec![0.5, 0.5])
            .unwrap();
        let kg_per_h = s.flow_rate_in("kg/h").unwrap();
        assert!((kg_per_h - 0.5 * (44.097 + 86.178)).abs() < 1e-9);
    }

    #[test]
    fn mass_flow_converts_back_to_molar() {
        let molar = feed()
            .with_flow_rate(1.0, "kmol/h")
            .with_compositions(vec![0.5, 0.5])
            .unwrap();
        let kg_per_h = molar.flow_rate_in("kg/h").unwrap();
        assert!((kg_per_h - 65.1375).abs() < 1e-9);

        let mass = molar.clone().with_flow_rate(kg_per_h, "kg/h");
        let kmol_per_h = mass.flow_rate_in("kmol/h").unwrap();
        assert!((kmol_per_h - 1.0).abs() < 1e-12, "{kmol_per_h}");
    }

    #[test]
    fn mixture_basis_follows_flow_unit() {
        let s = feed()
            .with_flow_rate(1.0, "kmol/h")
            .with_compositions(vec![0.5, 0.5])
            .unwrap();
        let molar: Vec<f64> = s.mixture_basis().unwrap().iter().map(|c| c.fraction).collect();
        assert_eq!(molar, vec![0.5, 0.5]);

        let mass: Vec<f64> = s
            .with_flow_rate(10.0, "lb/h")
            .mixture_basis()
            .unwrap()
            .iter()
            .map(|c| c.fraction)
            .collect();
        assert!((mass[0] - 44.097 / 130.275).abs() < 1e-12);
        assert!((mass[0] + mass[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_composition_has_no_mass_basis() {
        let s = feed().with_flow_rate(5.0, "kg/h");
        assert!(matches!(
            s.flow_rate_in("kmol/h"),
            Err(StreamError::InvalidComposition { .. })
        ));
        assert_eq!(feed().flow_rate_in("mol/h").unwrap(), 0.0);
    }

    #[test]
    fn substance_order_does_not_matter_for_sameness() {
        let registry =
            SubstanceRegistry::load(&BuiltinSource, ["Propane", "n-Hexane", "Water"]).unwrap();
        let forward = Stream::new("A", registry.select(["propane", "n-hexane"]).unwrap()).unwrap();
        let reverse = Stream::new("B", registry.select(["n-hexane", "propane"]).unwrap()).unwrap();
        let other = Stream::new("C", registry.select(["propane", "water"]).unwrap()).unwrap();
        let shorter = Stream::new("D", registry.select(["propane"]).unwrap()).unwrap();

        assert!(forward.has_same_substances(&reverse));
        assert!(!forward.has_same_substances(&other));
        assert!(!forward.has_same_substances(&shorter));
        assert!(!shorter.has_same_substances(&forward));
    }

    #[test]
    fn setters_overwrite_in_place() {
        let mut s = feed().with_pressure(1.0, "atm");
        s.set_pressure(101.325, "kPa");
        assert_eq!(s.pressure().map(|p| p.value()), Some(101.325));
        s.clear_pressure();
        assert!(s.pressure().is_none());
    }
}
