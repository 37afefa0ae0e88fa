//! pf-units: unit conversion by free-form unit tokens.
//!
//! Every converter takes a value plus `from`/`to` unit strings, matched
//! case-insensitively after trimming. Converters are total over their unit
//! set and return the input unchanged when both tokens name the same unit.
//! Unknown tokens are an error, never a silent pass-through.
//!
//! # Example
//!
//! ```
//! use pf_units::{MixtureComponent, flow_rate, temperature};
//!
//! assert_eq!(temperature(80.0, "C", "F").unwrap(), 176.0);
//!
//! let mix = [MixtureComponent::new(1.0, 18.015)];
//! let kg_per_h = flow_rate(1.0, &mix, "kmol/h", "kg/h").unwrap();
//! assert!((kg_per_h - 18.015).abs() < 1e-9);
//! ```

pub mod amount;
pub mod error;
pub mod flow;
pub mod pressure;
pub mod quantity;
pub mod temperature;
pub mod time;

pub use amount::{MassUnit, MolarUnit, mass_flow, molar_flow};
pub use error::{UnitError, UnitResult};
pub use flow::{FlowUnit, MixtureComponent, change_flow_basis, flow_rate};
pub use pressure::{PressureUnit, pressure};
pub use quantity::{Quantity, convert};
pub use temperature::{TemperatureUnit, temperature};
pub use time::{TimeUnit, time};

/// Lowercased, trimmed unit token.
pub(crate) fn normalize(unit: &str) -> String {
    unit.trim().to_lowercase()
}
