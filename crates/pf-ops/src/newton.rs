//! Scalar Newton-Raphson root finder.

use pf_core::ensure_finite;
use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::error::{OpError, OpResult};

/// Newton solver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the step size
    pub tolerance: f64,
    /// Starting point
    pub initial_guess: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tolerance: 1.48e-8,
            initial_guess: 0.5,
        }
    }
}

/// Newton iteration result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonResult {
    /// Converged root
    pub root: f64,
    /// Residual at the root
    pub residual: f64,
    /// Number of Newton steps taken
    pub iterations: usize,
}

/// Find a root of `f` starting from `config.initial_guess`.
///
/// Converges when a step is smaller than `config.tolerance`. A vanishing
/// derivative, a non-finite iterate, or running out of iterations is a
/// [`OpError::Convergence`] error.
pub fn newton_solve<F, D>(f: F, df: D, config: &NewtonConfig) -> OpResult<NewtonResult>
where
    F: Fn(f64) -> f64,
    D: Fn(f64) -> f64,
{
    let mut x = config.initial_guess;

    for iter in 0..config.max_iterations {
        let fx = ensure_finite(f(x), "newton residual")?;
        let dfx = ensure_finite(df(x), "newton derivative")?;
        if dfx == 0.0 {
            return Err(OpError::Convergence {
                what: format!("derivative vanished at x = {x} (iteration {iter})"),
            });
        }

        let step = fx / dfx;
        trace!(iter, x, residual = fx, step, "newton step");
        let x_new = ensure_finite(x - step, "newton iterate")?;

        if (x_new - x).abs() < config.tolerance {
            return Ok(NewtonResult {
                root: x_new,
                residual: f(x_new),
                iterations: iter + 1,
            });
        }
        x = x_new;
    }

    warn!(
        max_iterations = config.max_iterations,
        x, "newton solve hit the iteration cap"
    );
    Err(OpError::Convergence {
        what: format!(
            "Maximum iterations {} reached, x = {}",
            config.max_iterations, x
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_quadratic() {
        // x^2 - 4 = 0 from x0 = 3
        let config = NewtonConfig {
            initial_guess: 3.0,
            ..NewtonConfig::default()
        };
        let result = newton_solve(|x| x * x - 4.0, |x| 2.0 * x, &config).unwrap();
        assert!((result.root - 2.0).abs() < 1e-10);
        assert!(result.iterations < 10);
        assert!(result.residual.abs() < 1e-12);
    }

    #[test]
    fn vanishing_derivative() {
        let config = NewtonConfig {
            initial_guess: 0.0,
            ..NewtonConfig::default()
        };
        let err = newton_solve(|x| x * x + 1.0, |x| 2.0 * x, &config).unwrap_err();
        assert!(matches!(err, OpError::Convergence { .. }));
    }

    #[test]
    fn iteration_cap() {
        // x^2 + 1 has no real root; Newton wanders forever
        let config = NewtonConfig {
            max_iterations: 5,
            initial_guess: 0.3,
            ..NewtonConfig::default()
        };
        let err = newton_solve(|x| x * x + 1.0, |x| 2.0 * x, &config).unwrap_err();
        assert!(err.to_string().contains("Maximum iterations 5"));
    }

    #[test]
    fn non_finite_residual() {
        let err = newton_solve(|x| 1.0 / (x - 0.5), |_| 1.0, &NewtonConfig::default()).unwrap_err();
        assert!(matches!(err, OpError::Convergence { .. }));
        assert!(err.to_string().contains("newton residual"));
    }

    #[test]
    fn non_finite_iterate() {
        // tiny derivative throws the step to infinity
        let err = newton_solve(|_| 1.0, |_| 1e-320, &NewtonConfig::default()).unwrap_err();
        assert!(err.to_string().contains("newton iterate"));
    }

    #[test]
    fn defaults() {
        let config = NewtonConfig::default();
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.tolerance, 1.48e-8);
        assert_eq!(config.initial_guess, 0.5);
    }
}
