//! pf-streams: process streams and their named parameters.
//!
//! A [`Stream`] carries shared substance handles, a mole-fraction
//! [`Composition`] aligned to those substances, a flow rate and optional
//! pressure/temperature. Unit operations read an inlet stream and write their
//! results into outlet streams in place.

pub mod composition;
pub mod error;
pub mod parameter;
pub mod stream;

pub use composition::Composition;
pub use error::{StreamError, StreamResult};
pub use parameter::{Parameter, ParameterKind};
pub use stream::Stream;
