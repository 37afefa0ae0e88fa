//! pf-substances: substances and their vapor-pressure correlations.
//!
//! Provides:
//! - Antoine coefficient tables with temperature ranges
//! - `Substance`: immutable reference data shared by streams
//! - Vapor-pressure evaluation (fails outside the tabulated ranges)
//! - `SubstanceRegistry`: owner of shared substances, keyed by tag
//! - `SubstanceDataSource`: collaborators that supply coefficients
//!   (built-in catalog, YAML files, in-memory maps)
//!
//! # Example
//!
//! ```
//! use pf_core::units::{in_bar, k};
//! use pf_substances::{BuiltinSource, SubstanceRegistry};
//!
//! let registry = SubstanceRegistry::load(&BuiltinSource, ["Propane", "Hexane"]).unwrap();
//! let propane = registry.require("propane").unwrap();
//! let p = propane.vapor_pressure(k(323.0)).unwrap();
//! assert!(in_bar(p) > 10.0);
//! ```

pub mod antoine;
pub mod catalog;
pub mod error;
pub mod registry;
pub mod source;
pub mod substance;
pub mod vapor_pressure;

// Re-exports for ergonomics
pub use antoine::{AntoineRecord, AntoineTable};
pub use catalog::{
    BuiltinSource, CatalogEntry, builtin_catalog, filter_builtin_catalog, find_builtin,
};
pub use error::{SubstanceError, SubstanceResult};
pub use registry::SubstanceRegistry;
pub use source::{Layered, MapSource, Retrying, SubstanceData, SubstanceDataSource};
pub use substance::Substance;
pub use vapor_pressure::{vapor_pressure, vapor_pressure_bar};
