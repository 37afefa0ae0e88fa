//! pf-ops: unit operations that solve equilibrium between streams.
//!
//! The only operation so far is the single-stage isothermal flash: ideal
//! K-values from Antoine vapor pressures and a Newton solve of the
//! Rachford-Rice equation for the vapor fraction.
//!
//! # Example
//!
//! ```
//! use pf_ops::FlashSolver;
//! use pf_streams::Stream;
//! use pf_substances::{BuiltinSource, SubstanceRegistry};
//!
//! let registry = SubstanceRegistry::load(&BuiltinSource, ["Propane", "n-Hexane"]).unwrap();
//! let inlet = Stream::new("Feed", registry.all())
//!     .unwrap()
//!     .with_flow_rate(100.0, "kmol/h")
//!     .with_compositions(vec![0.5, 0.5])
//!     .unwrap()
//!     .with_pressure(5.0, "bar")
//!     .with_temperature(323.0, "K");
//! let mut vapor = Stream::new("Vapor", registry.all()).unwrap();
//! let mut liquid = Stream::new("Liquid", registry.all()).unwrap();
//!
//! let report = FlashSolver::default().flash(&inlet, &mut vapor, &mut liquid).unwrap();
//! assert!(report.vapor_fraction > 0.0 && report.vapor_fraction < 1.0);
//! ```

pub mod error;
pub mod flash;
pub mod newton;
pub mod traits;

pub use error::{OpError, OpResult};
pub use flash::{Flash, FlashConfig, FlashReport, FlashSolver, FlashState, RachfordRice};
pub use newton::{NewtonConfig, NewtonResult, newton_solve};
pub use traits::UnitOperation;
