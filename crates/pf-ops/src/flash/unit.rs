//! Flash drum that owns its streams.

use pf_core::name_to_tag;
use pf_streams::Stream;
use tracing::info;

use super::solver::{FlashConfig, FlashReport, FlashSolver};
use crate::error::OpResult;

#[derive(Debug, Clone, PartialEq)]
pub enum FlashState {
    Unsolved,
    Solved(FlashReport),
}

/// A named flash separator with one inlet and vapor/liquid outlets.
///
/// Editing the inlet drops the unit back to [`FlashState::Unsolved`]; a failed
/// solve does the same and leaves the outlets as they were.
#[derive(Debug, Clone)]
pub struct Flash {
    name: String,
    tag: String,
    inlet: Stream,
    vapor: Stream,
    liquid: Stream,
    solver: FlashSolver,
    state: FlashState,
}

impl Flash {
    pub fn new(name: impl Into<String>, inlet: Stream, vapor: Stream, liquid: Stream) -> Self {
        let name = name.into();
        Self {
            tag: name_to_tag(&name),
            name,
            inlet,
            vapor,
            liquid,
            solver: FlashSolver::default(),
            state: FlashState::Unsolved,
        }
    }

    /// Flash with fresh outlets named after the unit.
    pub fn from_inlet(name: impl Into<String>, inlet: Stream) -> OpResult<Self> {
        let name = name.into();
        let vapor = Stream::new(format!("{name} Vapor"), inlet.substances().to_vec())?;
        let liquid = Stream::new(format!("{name} Liquid"), inlet.substances().to_vec())?;
        Ok(Self::new(name, inlet, vapor, liquid))
    }

    pub fn with_config(mut self, config: FlashConfig) -> Self {
        self.solver = FlashSolver::new(config);
        self.state = FlashState::Unsolved;
        self
    }

    pub fn solve(&mut self) -> OpResult<FlashReport> {
        info!(unit = %self.name, "solving flash");
        let result = self
            .solver
            .flash(&self.inlet, &mut self.vapor, &mut self.liquid);
        self.state = match &result {
            Ok(report) => FlashState::Solved(report.clone()),
            Err(_) => FlashState::Unsolved,
        };
        result
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn inlet(&self) -> &Stream {
        &self.inlet
    }

    /// Mutable inlet access; marks the unit unsolved.
    pub fn inlet_mut(&mut self) -> &mut Stream {
        self.state = FlashState::Unsolved;
        &mut self.inlet
    }

    pub fn vapor(&self) -> &Stream {
        &self.vapor
    }

    pub fn liquid(&self) -> &Stream {
        &self.liquid
    }

    pub fn state(&self) -> &FlashState {
        &self.state
    }

    pub fn is_solved(&self) -> bool {
        matches!(self.state, FlashState::Solved(_))
    }

    pub fn report(&self) -> Option<&FlashReport> {
        match &self.state {
            FlashState::Solved(report) => Some(report),
            FlashState::Unsolved => None,
        }
    }
}
