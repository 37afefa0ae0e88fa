//! Built-in substance catalog.
//!
//! Antoine coefficients are NIST WebBook fits in bar and kelvin. Ranges that
//! the published fits overlap have been clipped so the tables stay disjoint.

use pf_core::name_to_tag;

use crate::antoine::{AntoineRecord, AntoineTable};
use crate::error::{SubstanceError, SubstanceResult};
use crate::source::{SubstanceData, SubstanceDataSource};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogEntry {
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    /// kg/kmol
    pub molar_mass: f64,
    pub antoine: &'static [AntoineRecord],
}

impl CatalogEntry {
    /// Substring search over id, display name and aliases; empty matches all.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }

    /// Exact match of `name` against id, display name or an alias, by tag.
    pub fn answers_to(&self, name: &str) -> bool {
        let tag = name_to_tag(name);
        name_to_tag(self.canonical_id) == tag
            || name_to_tag(self.display_name) == tag
            || self.aliases.iter().any(|alias| name_to_tag(alias) == tag)
    }

    pub fn data(&self) -> SubstanceResult<SubstanceData> {
        Ok(SubstanceData::new(
            self.molar_mass,
            AntoineTable::new(self.antoine.to_vec())?,
        ))
    }
}

const BUILTIN_CATALOG: [CatalogEntry; 10] = [
    CatalogEntry {
        canonical_id: "propane",
        display_name: "Propane",
        aliases: &["c3h8", "n-propane"],
        molar_mass: 44.097,
        antoine: &[
            AntoineRecord::new(166.02, 231.41, 4.01158, 834.26, -22.763),
            AntoineRecord::new(231.41, 277.6, 3.98292, 819.296, -24.417),
            AntoineRecord::new(277.6, 360.8, 4.53678, 1149.36, 24.906),
        ],
    },
    CatalogEntry {
        canonical_id: "n-butane",
        display_name: "n-Butane",
        aliases: &["butane", "nbutane", "c4h10"],
        molar_mass: 58.124,
        antoine: &[
            AntoineRecord::new(135.42, 195.11, 4.70812, 1200.475, -13.013),
            AntoineRecord::new(195.11, 272.66, 3.85002, 909.65, -36.146),
            AntoineRecord::new(272.66, 425.0, 4.35576, 1175.581, -2.071),
        ],
    },
    CatalogEntry {
        canonical_id: "n-pentane",
        display_name: "n-Pentane",
        aliases: &["pentane", "npentane", "c5h12"],
        molar_mass: 72.151,
        antoine: &[AntoineRecord::new(268.8, 341.37, 3.9892, 1070.617, -40.454)],
    },
    CatalogEntry {
        canonical_id: "n-hexane",
        display_name: "n-Hexane",
        aliases: &["hexane", "nhexane", "c6h14"],
        molar_mass: 86.178,
        antoine: &[
            AntoineRecord::new(177.70, 264.93, 3.45604, 901.167, -77.773),
            AntoineRecord::new(286.18, 342.69, 4.00266, 1171.53, -48.784),
        ],
    },
    CatalogEntry {
        canonical_id: "water",
        display_name: "Water",
        aliases: &["h2o"],
        molar_mass: 18.015,
        antoine: &[
            AntoineRecord::new(255.9, 373.0, 4.6543, 1435.264, -64.848),
            AntoineRecord::new(379.0, 573.0, 3.55959, 643.748, -198.043),
        ],
    },
    CatalogEntry {
        canonical_id: "methanol",
        display_name: "Methanol",
        aliases: &["ch3oh", "methyl alcohol"],
        molar_mass: 32.042,
        antoine: &[AntoineRecord::new(288.1, 356.83, 5.20409, 1581.341, -33.5)],
    },
    CatalogEntry {
        canonical_id: "ethanol",
        display_name: "Ethanol",
        aliases: &["c2h5oh", "ethyl alcohol"],
        molar_mass: 46.069,
        antoine: &[AntoineRecord::new(292.77, 366.63, 5.24677, 1598.673, -46.424)],
    },
    CatalogEntry {
        canonical_id: "benzene",
        display_name: "Benzene",
        aliases: &["c6h6"],
        molar_mass: 78.112,
        antoine: &[AntoineRecord::new(287.70, 354.07, 4.01814, 1203.835, -53.226)],
    },
    CatalogEntry {
        canonical_id: "toluene",
        display_name: "Toluene",
        aliases: &["c7h8", "methylbenzene"],
        molar_mass: 92.138,
        antoine: &[AntoineRecord::new(308.52, 384.66, 4.07827, 1343.943, -53.773)],
    },
    CatalogEntry {
        canonical_id: "nitrogen",
        display_name: "Nitrogen",
        aliases: &["n2"],
        molar_mass: 28.014,
        antoine: &[AntoineRecord::new(63.14, 126.0, 3.7362, 264.651, -6.788)],
    },
];

pub fn builtin_catalog() -> &'static [CatalogEntry] {
    &BUILTIN_CATALOG
}

pub fn filter_builtin_catalog(query: &str) -> Vec<CatalogEntry> {
    builtin_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

/// Exact lookup by name, id or alias.
pub fn find_builtin(name: &str) -> Option<&'static CatalogEntry> {
    builtin_catalog().iter().find(|entry| entry.answers_to(name))
}

/// [`SubstanceDataSource`] backed by the built-in catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl SubstanceDataSource for BuiltinSource {
    fn load(&self, name: &str) -> SubstanceResult<SubstanceData> {
        find_builtin(name)
            .ok_or_else(|| SubstanceError::DataUnavailable {
                name: name.trim().to_string(),
                reason: "not in built-in catalog".to_string(),
            })?
            .data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in builtin_catalog() {
            assert!(
                seen.insert(name_to_tag(entry.canonical_id)),
                "duplicate canonical id: {}",
                entry.canonical_id
            );
        }
    }

    #[test]
    fn every_entry_has_a_valid_table() {
        for entry in builtin_catalog() {
            let data = entry.data().unwrap();
            assert!(!data.antoine.is_empty(), "{}", entry.canonical_id);
            assert!(data.molar_mass > 0.0);
        }
    }

    #[test]
    fn aliases_resolve_to_the_same_entry() {
        let by_alias = find_builtin("Butane").unwrap();
        let by_formula = find_builtin("C4H10").unwrap();
        let by_display = find_builtin("n-Butane").unwrap();
        assert_eq!(by_alias.canonical_id, "n-butane");
        assert_eq!(by_formula, by_display);
    }

    #[test]
    fn search_finds_alcohols() {
        let results = filter_builtin_catalog("alcohol");
        assert_eq!(results.len(), 2);
        assert_eq!(filter_builtin_catalog("").len(), builtin_catalog().len());
    }

    #[test]
    fn worked_example_vapor_pressures() {
        let expected = [
            ("propane", 17.10),
            ("butane", 4.93),
            ("pentane", 1.585),
            ("hexane", 0.537),
        ];
        for (name, p_bar) in expected {
            let data = BuiltinSource.load(name).unwrap();
            let p = data.antoine.vapor_pressure_bar(323.0).unwrap();
            assert!((p - p_bar).abs() / p_bar < 0.01, "{name}: {p}");
        }
    }

    #[test]
    fn unknown_name_is_data_unavailable() {
        assert!(matches!(
            BuiltinSource.load("unobtainium"),
            Err(SubstanceError::DataUnavailable { .. })
        ));
    }
}
