//! Core trait for unit operations.

use pf_streams::Stream;

use crate::error::OpResult;

/// A process unit that turns one inlet stream into a fixed number of outlets.
///
/// Operations are deterministic functions of the inlet and their own
/// configuration: solving twice with an unchanged inlet writes identical
/// outlets. Outlets are updated in place and left untouched on error.
pub trait UnitOperation: Send + Sync {
    /// Summary of a successful solve.
    type Report;

    /// Operation name for logging and identification.
    fn name(&self) -> &str;

    /// Number of outlet streams `solve` expects.
    fn outlet_count(&self) -> usize;

    /// Solve the operation, writing results into `outlets`.
    fn solve(&self, inlet: &Stream, outlets: &mut [Stream]) -> OpResult<Self::Report>;
}
