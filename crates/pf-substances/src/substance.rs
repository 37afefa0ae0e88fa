//! Substance reference data.

use pf_core::name_to_tag;
use pf_core::units::{MolarMass, Pressure, Temperature, kg_per_kmol};

use crate::antoine::AntoineTable;
use crate::error::{SubstanceError, SubstanceResult};
use crate::source::{SubstanceData, SubstanceDataSource};
use crate::vapor_pressure;

/// A chemical substance: identity, molar mass and vapor-pressure data.
///
/// Immutable after construction. Streams share substances through
/// `Arc<Substance>` handles owned by a [`crate::SubstanceRegistry`].
#[derive(Debug, Clone, PartialEq)]
pub struct Substance {
    name: String,
    tag: String,
    /// kg/kmol
    molar_mass: f64,
    antoine: AntoineTable,
}

impl Substance {
    pub fn new(
        name: impl Into<String>,
        molar_mass: f64,
        antoine: AntoineTable,
    ) -> SubstanceResult<Self> {
        let name = name.into();
        if !(molar_mass.is_finite() && molar_mass > 0.0) {
            return Err(SubstanceError::NonPhysical {
                what: "molar mass",
                value: molar_mass,
            });
        }
        Ok(Self {
            tag: name_to_tag(&name),
            name,
            molar_mass,
            antoine,
        })
    }

    pub fn from_data(name: impl Into<String>, data: SubstanceData) -> SubstanceResult<Self> {
        Self::new(name, data.molar_mass, data.antoine)
    }

    /// Fetch data for `name` from `source`; the substance keeps the requested name.
    pub fn load(name: &str, source: &dyn SubstanceDataSource) -> SubstanceResult<Self> {
        let data = source.load(name)?;
        Self::from_data(name.trim(), data)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Molar mass [kg/kmol].
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    pub fn molar_mass_si(&self) -> MolarMass {
        kg_per_kmol(self.molar_mass)
    }

    pub fn antoine(&self) -> &AntoineTable {
        &self.antoine
    }

    /// Saturation pressure at `temperature`; see [`vapor_pressure::vapor_pressure`].
    pub fn vapor_pressure(&self, temperature: Temperature) -> SubstanceResult<Pressure> {
        vapor_pressure::vapor_pressure(self, temperature)
    }
}
