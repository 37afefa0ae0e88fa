//! Owner of the substances a flow sheet works with.

use std::sync::Arc;

use pf_core::name_to_tag;
use tracing::debug;

use crate::error::{SubstanceError, SubstanceResult};
use crate::source::SubstanceDataSource;
use crate::substance::Substance;

/// Substances keyed by tag, in registration order.
///
/// Streams hold `Arc` handles into the registry, so a substance outlives any
/// registry that has been dropped while streams still reference it.
#[derive(Debug, Clone, Default)]
pub struct SubstanceRegistry {
    substances: Vec<Arc<Substance>>,
}

impl SubstanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every name in `names` from `source`.
    pub fn load<I, N>(source: &dyn SubstanceDataSource, names: I) -> SubstanceResult<Self>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut registry = Self::new();
        for name in names {
            registry.load_one(source, name.as_ref())?;
        }
        Ok(registry)
    }

    /// Load one substance and register it.
    pub fn load_one(
        &mut self,
        source: &dyn SubstanceDataSource,
        name: &str,
    ) -> SubstanceResult<Arc<Substance>> {
        let substance = Substance::load(name, source)?;
        debug!(
            substance = substance.tag(),
            molar_mass = substance.molar_mass(),
            ranges = substance.antoine().len(),
            "loaded substance"
        );
        self.register(substance)
    }

    /// Add a substance; its tag must not be present yet.
    pub fn register(&mut self, substance: Substance) -> SubstanceResult<Arc<Substance>> {
        if self.get(substance.tag()).is_some() {
            return Err(SubstanceError::Duplicate {
                tag: substance.tag().to_string(),
            });
        }
        let substance = Arc::new(substance);
        self.substances.push(Arc::clone(&substance));
        Ok(substance)
    }

    /// Look up by name or tag.
    pub fn get(&self, name: &str) -> Option<&Arc<Substance>> {
        let tag = name_to_tag(name);
        self.substances.iter().find(|s| s.tag() == tag)
    }

    pub fn require(&self, name: &str) -> SubstanceResult<Arc<Substance>> {
        self.get(name)
            .cloned()
            .ok_or_else(|| SubstanceError::Unknown {
                tag: name_to_tag(name),
            })
    }

    /// Handles for `names`, in the order given.
    pub fn select<I, N>(&self, names: I) -> SubstanceResult<Vec<Arc<Substance>>>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        names.into_iter().map(|n| self.require(n.as_ref())).collect()
    }

    /// All handles, in registration order.
    pub fn all(&self) -> Vec<Arc<Substance>> {
        self.substances.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Substance>> {
        self.substances.iter()
    }

    pub fn tags(&self) -> Vec<&str> {
        self.substances.iter().map(|s| s.tag()).collect()
    }

    pub fn len(&self) -> usize {
        self.substances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substances.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::antoine::AntoineTable;
    use crate::catalog::BuiltinSource;

    #[test]
    fn load_preserves_order() {
        let registry =
            SubstanceRegistry::load(&BuiltinSource, ["Hexane", "Propane", "n-Butane"]).unwrap();
        assert_eq!(registry.tags(), vec!["hexane", "propane", "n-butane"]);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn duplicate_tags_are_rejected() {
        let err = SubstanceRegistry::load(&BuiltinSource, ["Propane", "propane"]).unwrap_err();
        assert_eq!(
            err,
            SubstanceError::Duplicate {
                tag: "propane".into()
            }
        );
    }

    #[test]
    fn lookup_normalizes_names() {
        let mut registry = SubstanceRegistry::new();
        registry
            .register(Substance::new("Carbon Dioxide", 44.01, AntoineTable::empty()).unwrap())
            .unwrap();
        assert!(registry.get("carbon   dioxide").is_some());
        assert!(registry.get("CARBON DIOXIDE").is_some());
        assert!(matches!(
            registry.require("carbon monoxide"),
            Err(SubstanceError::Unknown { .. })
        ));
    }

    #[test]
    fn handles_are_shared() {
        let registry = SubstanceRegistry::load(&BuiltinSource, ["Water"]).unwrap();
        let a = registry.require("water").unwrap();
        let b = registry.require("Water").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn select_keeps_requested_order() {
        let registry = SubstanceRegistry::load(&BuiltinSource, ["Water", "Methanol"]).unwrap();
        let selected = registry.select(["methanol", "water"]).unwrap();
        assert_eq!(selected[0].tag(), "methanol");
        assert!(registry.select(["ethanol"]).is_err());
    }
}
