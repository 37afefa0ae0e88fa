//! pf-core: stable foundation for procflow.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - tag (name normalization used for lookup keys)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod tag;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PfError, PfResult};
pub use numeric::*;
pub use tag::name_to_tag;
pub use units::*;
