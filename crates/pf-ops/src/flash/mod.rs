//! Single-stage isothermal flash separation.

mod rachford_rice;
mod solver;
mod unit;

pub use rachford_rice::RachfordRice;
pub use solver::{FlashConfig, FlashReport, FlashSolver};
pub use unit::{Flash, FlashState};
