use thiserror::Error;

use crate::PfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Tolerances {
    pub const fn new(abs: Real, rel: Real) -> Self {
        Self { abs, rel }
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// A value rejected by [`ensure_finite`].
///
/// Crate errors convert from it, so `ensure_finite(x, "what")?` works in any
/// crate of the workspace.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("Non-finite numeric value for {what}: {value}")]
pub struct NonFinite {
    pub what: &'static str,
    pub value: Real,
}

impl From<NonFinite> for PfError {
    fn from(e: NonFinite) -> Self {
        PfError::NonFinite {
            what: e.what,
            value: e.value,
        }
    }
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, NonFinite> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn nearly_equal_relative_scale() {
        let tol = Tolerances::new(0.0, 1e-6);
        assert!(nearly_equal(101_325.0, 101_325.05, tol));
        assert!(!nearly_equal(101_325.0, 101_326.0, tol));
    }

    #[test]
    fn ensure_finite_passes_finite_values() {
        assert_eq!(ensure_finite(-3.5, "x"), Ok(-3.5));
    }

    #[test]
    fn ensure_finite_rejects_nan_and_infinity() {
        let err = ensure_finite(Real::INFINITY, "vapor pressure").unwrap_err();
        assert_eq!(err.what, "vapor pressure");
        assert!(ensure_finite(Real::NAN, "x").is_err());

        let err: PfError = err.into();
        assert!(matches!(
            err,
            PfError::NonFinite {
                what: "vapor pressure",
                ..
            }
        ));
        assert!(err.to_string().contains("Non-finite"));
    }
}
