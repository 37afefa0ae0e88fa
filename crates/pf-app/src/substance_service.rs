//! Substance lookups for the CLI.

use pf_substances::{Substance, SubstanceDataSource, filter_builtin_catalog, vapor_pressure_bar};
use serde::Serialize;

use crate::error::AppResult;

/// Catalog row for listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstanceSummary {
    pub id: String,
    pub name: String,
    pub aliases: Vec<String>,
    pub molar_mass: f64,
    /// `(lowest, highest)` tabulated temperature [K].
    pub range_k: Option<(f64, f64)>,
}

/// Built-in substances matching `query` (empty matches all).
pub fn list_substances(query: &str) -> Vec<SubstanceSummary> {
    filter_builtin_catalog(query)
        .into_iter()
        .map(|entry| SubstanceSummary {
            id: entry.canonical_id.to_string(),
            name: entry.display_name.to_string(),
            aliases: entry.aliases.iter().map(|a| a.to_string()).collect(),
            molar_mass: entry.molar_mass,
            range_k: entry
                .antoine
                .iter()
                .map(|r| (r.t_low, r.t_high))
                .reduce(|(lo, hi), (l, h)| (lo.min(l), hi.max(h))),
        })
        .collect()
}

/// Saturation pressure of `name` at `temperature` [`temperature_unit`],
/// expressed in `pressure_unit`.
pub fn vapor_pressure(
    source: &dyn SubstanceDataSource,
    name: &str,
    temperature: f64,
    temperature_unit: &str,
    pressure_unit: &str,
) -> AppResult<f64> {
    let substance = Substance::load(name, source)?;
    let t_k = pf_units::temperature(temperature, temperature_unit, "K")?;
    let p_bar = vapor_pressure_bar(&substance, t_k)?;
    Ok(pf_units::pressure(p_bar, "bar", pressure_unit)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppError;
    use pf_substances::BuiltinSource;

    #[test]
    fn lists_whole_catalog() {
        let all = list_substances("");
        assert!(all.iter().any(|s| s.id == "propane"));
        let hexane = all.iter().find(|s| s.id == "n-hexane").unwrap();
        assert_eq!(hexane.range_k, Some((177.70, 342.69)));
    }

    #[test]
    fn vapor_pressure_in_requested_units() {
        let bar = vapor_pressure(&BuiltinSource, "propane", 323.0, "K", "bar").unwrap();
        let kpa = vapor_pressure(&BuiltinSource, "propane", 49.85, "C", "kPa").unwrap();
        assert!((bar * 100.0 - kpa).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_surfaces() {
        assert!(matches!(
            vapor_pressure(&BuiltinSource, "methanol", 500.0, "K", "bar"),
            Err(AppError::Substance(_))
        ));
    }
}
