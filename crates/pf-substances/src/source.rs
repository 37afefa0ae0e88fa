//! Collaborators that supply substance reference data.
//!
//! A data source is consulted once per substance when the registry is built,
//! never during a solve. Retry and timeout policy belongs to the source
//! (see [`Retrying`]), not to the solver.

use std::collections::HashMap;
use std::path::Path;
use std::thread;
use std::time::Duration;

use pf_core::name_to_tag;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::antoine::AntoineTable;
use crate::error::{SubstanceError, SubstanceResult};

/// Numbers a data source supplies for one substance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstanceData {
    /// kg/kmol
    pub molar_mass: f64,
    #[serde(default)]
    pub antoine: AntoineTable,
}

impl SubstanceData {
    pub fn new(molar_mass: f64, antoine: AntoineTable) -> Self {
        Self {
            molar_mass,
            antoine,
        }
    }
}

/// Supplier of Antoine tables and molar masses by substance name.
///
/// Implementations must be thread-safe (Send + Sync) so a registry can be
/// built from any thread.
pub trait SubstanceDataSource: Send + Sync {
    /// Load data for `name`, or fail with [`SubstanceError::DataUnavailable`].
    fn load(&self, name: &str) -> SubstanceResult<SubstanceData>;
}

impl<S: SubstanceDataSource + ?Sized> SubstanceDataSource for &S {
    fn load(&self, name: &str) -> SubstanceResult<SubstanceData> {
        (**self).load(name)
    }
}

impl<S: SubstanceDataSource + ?Sized> SubstanceDataSource for Box<S> {
    fn load(&self, name: &str) -> SubstanceResult<SubstanceData> {
        (**self).load(name)
    }
}

/// In-memory source keyed by tag, with optional aliases.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    entries: HashMap<String, SubstanceData>,
}

#[derive(Debug, Deserialize)]
struct SourceFile {
    substances: Vec<SourceEntry>,
}

#[derive(Debug, Deserialize)]
struct SourceEntry {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    molar_mass: f64,
    #[serde(default)]
    antoine: AntoineTable,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the entry for `name`.
    pub fn insert(&mut self, name: &str, data: SubstanceData) {
        self.entries.insert(name_to_tag(name), data);
    }

    pub fn with(mut self, name: &str, data: SubstanceData) -> Self {
        self.insert(name, data);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a YAML document of the form
    ///
    /// ```yaml
    /// substances:
    ///   - name: Propane
    ///     aliases: [c3h8]
    ///     molar_mass: 44.097
    ///     antoine:
    ///       - {t_low: 277.6, t_high: 360.8, a: 4.53678, b: 1149.36, c: 24.906}
    /// ```
    pub fn from_yaml_str(content: &str) -> SubstanceResult<Self> {
        let file: SourceFile =
            serde_yaml::from_str(content).map_err(|e| SubstanceError::DataUnavailable {
                name: "<yaml>".to_string(),
                reason: e.to_string(),
            })?;

        let mut source = Self::new();
        for entry in file.substances {
            let data = SubstanceData::new(entry.molar_mass, entry.antoine);
            for alias in &entry.aliases {
                source.insert(alias, data.clone());
            }
            source.insert(&entry.name, data);
        }
        Ok(source)
    }

    pub fn from_yaml_path(path: &Path) -> SubstanceResult<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SubstanceError::DataUnavailable {
                name: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Self::from_yaml_str(&content)
    }
}

impl SubstanceDataSource for MapSource {
    fn load(&self, name: &str) -> SubstanceResult<SubstanceData> {
        self.entries
            .get(&name_to_tag(name))
            .cloned()
            .ok_or_else(|| SubstanceError::DataUnavailable {
                name: name.trim().to_string(),
                reason: "not in table".to_string(),
            })
    }
}

/// Consult `first`, falling back to `second` when `first` has no data.
#[derive(Debug, Clone)]
pub struct Layered<A, B> {
    first: A,
    second: B,
}

impl<A, B> Layered<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: SubstanceDataSource, B: SubstanceDataSource> SubstanceDataSource for Layered<A, B> {
    fn load(&self, name: &str) -> SubstanceResult<SubstanceData> {
        match self.first.load(name) {
            Err(SubstanceError::DataUnavailable { .. }) => self.second.load(name),
            other => other,
        }
    }
}

/// Retry policy wrapped around a flaky source.
///
/// Only [`SubstanceError::DataUnavailable`] is retried; anything else is
/// returned immediately.
#[derive(Debug, Clone)]
pub struct Retrying<S> {
    inner: S,
    attempts: u32,
    delay: Duration,
}

impl<S> Retrying<S> {
    pub fn new(inner: S, attempts: u32, delay: Duration) -> Self {
        Self {
            inner,
            attempts: attempts.max(1),
            delay,
        }
    }
}

impl<S: SubstanceDataSource> SubstanceDataSource for Retrying<S> {
    fn load(&self, name: &str) -> SubstanceResult<SubstanceData> {
        let mut attempt = 1;
        loop {
            match self.inner.load(name) {
                Err(SubstanceError::DataUnavailable { reason, .. }) if attempt < self.attempts => {
                    warn!(substance = name, attempt, %reason, "substance data unavailable, retrying");
                    if !self.delay.is_zero() {
                        thread::sleep(self.delay);
                    }
                    attempt += 1;
                }
                result => {
                    if result.is_ok() && attempt > 1 {
                        debug!(substance = name, attempt, "substance data loaded after retry");
                    }
                    return result;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::antoine::AntoineRecord;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Flaky {
        failures: u32,
        calls: AtomicU32,
    }

    impl SubstanceDataSource for Flaky {
        fn load(&self, name: &str) -> SubstanceResult<SubstanceData> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call < self.failures {
                Err(SubstanceError::DataUnavailable {
                    name: name.to_string(),
                    reason: "timeout".to_string(),
                })
            } else {
                Ok(SubstanceData::new(18.015, AntoineTable::empty()))
            }
        }
    }

    const YAML: &str = r#"
substances:
  - name: Propane
    aliases: [C3H8]
    molar_mass: 44.097
    antoine:
      - {t_low: 277.6, t_high: 360.8, a: 4.53678, b: 1149.36, c: 24.906}
  - name: Mystery Oil
    molar_mass: 250.0
"#;

    #[test]
    fn yaml_source_resolves_names_and_aliases() {
        let source = MapSource::from_yaml_str(YAML).unwrap();
        let by_name = source.load("propane").unwrap();
        let by_alias = source.load("c3h8").unwrap();
        assert_eq!(by_name, by_alias);
        assert_eq!(
            by_name.antoine.records(),
            &[AntoineRecord::new(277.6, 360.8, 4.53678, 1149.36, 24.906)]
        );
    }

    #[test]
    fn yaml_entry_without_antoine_has_empty_table() {
        let source = MapSource::from_yaml_str(YAML).unwrap();
        let oil = source.load("Mystery Oil").unwrap();
        assert!(oil.antoine.is_empty());
    }

    #[test]
    fn malformed_yaml_is_data_unavailable() {
        let err = MapSource::from_yaml_str("substances: 3").unwrap_err();
        assert!(matches!(err, SubstanceError::DataUnavailable { .. }));
    }

    #[test]
    fn missing_file_is_data_unavailable() {
        let err = MapSource::from_yaml_path(Path::new("/nonexistent/substances.yaml")).unwrap_err();
        assert!(matches!(err, SubstanceError::DataUnavailable { .. }));
    }

    #[test]
    fn layered_falls_back_on_missing_data() {
        let first = MapSource::new().with("water", SubstanceData::new(18.0, AntoineTable::empty()));
        let second = MapSource::new().with("methanol", SubstanceData::new(32.0, AntoineTable::empty()));
        let layered = Layered::new(first, second);
        assert_eq!(layered.load("water").unwrap().molar_mass, 18.0);
        assert_eq!(layered.load("methanol").unwrap().molar_mass, 32.0);
        assert!(layered.load("ethanol").is_err());
    }

    #[test]
    fn retrying_recovers_from_transient_failures() {
        let source = Retrying::new(
            Flaky {
                failures: 2,
                calls: AtomicU32::new(0),
            },
            3,
            Duration::ZERO,
        );
        assert!(source.load("water").is_ok());
        assert_eq!(source.inner.calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn retrying_gives_up_after_attempts() {
        let source = Retrying::new(
            Flaky {
                failures: 5,
                calls: AtomicU32::new(0),
            },
            2,
            Duration::ZERO,
        );
        assert!(matches!(
            source.load("water"),
            Err(SubstanceError::DataUnavailable { .. })
        ));
        assert_eq!(source.inner.calls.load(Ordering::SeqCst), 2);
    }
}
