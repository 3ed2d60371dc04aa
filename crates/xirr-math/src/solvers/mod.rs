//! Root-finding algorithms.
//!
//! This module provides the bracketed secant solver used for rate
//! searches, together with its configuration and outcome types:
//!
//! - [`secant_bracketed`]: derivative-free search over a sign-changing
//!   interval, with dual stopping tolerances and stall detection
//!
//! # Stopping criteria
//!
//! Two tolerances are checked each iteration, in order:
//!
//! | Tolerance | Satisfied when | Handles |
//! |-----------|----------------|---------|
//! | `x_tolerance` | bracket width `\|b - a\|` shrinks below it | steep objectives |
//! | `y_tolerance` | residual `\|f(m)\|` falls below it | flat objectives |
//!
//! A flat objective can keep the residual near zero over a wide interval
//! (the width test ends the search); a steep one can satisfy the
//! residual test after a tiny move. Carrying both avoids spinning on
//! either shape.
//!
//! # Example
//!
//! ```rust
//! use xirr_math::solvers::{secant_bracketed, SolverConfig, SolverOutcome};
//!
//! // Find root of x^2 - x - 1 (the golden ratio)
//! let f = |x: f64| x * x - x - 1.0;
//!
//! match secant_bracketed(f, 1.0, 2.0, &SolverConfig::default()) {
//!     SolverOutcome::Converged(result) => {
//!         assert!((result.root - 1.618_033_988_749_895).abs() < 1e-6);
//!     }
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

mod secant;

pub use secant::{secant_bracketed, secant_bracketed_traced};

/// Default tolerance on the bracket width `|b - a|`.
pub const DEFAULT_X_TOLERANCE: f64 = 1e-6;

/// Default tolerance on the residual `|f(m)|`.
pub const DEFAULT_Y_TOLERANCE: f64 = 1e-6;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Iterations between stall-detection checkpoints.
pub const STALL_CHECK_INTERVAL: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance on the bracket width.
    pub x_tolerance: f64,
    /// Tolerance on the residual at the secant intercept.
    pub y_tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            x_tolerance: DEFAULT_X_TOLERANCE,
            y_tolerance: DEFAULT_Y_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(x_tolerance: f64, y_tolerance: f64, max_iterations: u32) -> Self {
        Self {
            x_tolerance,
            y_tolerance,
            max_iterations,
        }
    }

    /// Sets the bracket-width tolerance.
    #[must_use]
    pub fn with_x_tolerance(mut self, x_tolerance: f64) -> Self {
        self.x_tolerance = x_tolerance;
        self
    }

    /// Sets the residual tolerance.
    #[must_use]
    pub fn with_y_tolerance(mut self, y_tolerance: f64) -> Self {
        self.y_tolerance = y_tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a successful root-finding run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}

/// Outcome of a bracketed root search.
///
/// Every way the search can end is a variant here, so callers
/// pattern-match instead of juggling a sentinel alongside an error
/// channel. Only [`SolverOutcome::Stalled`] indicates something the
/// caller may want to report; the other non-converged variants mean
/// "no rate could be determined" and are ordinary values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolverOutcome {
    /// A root satisfying one of the stopping tolerances.
    Converged(SolverResult),
    /// The function had the same sign at both bracket endpoints, either
    /// initially or after a bracket update (the latter also absorbs NaN
    /// residuals, since a NaN fails every sign test).
    NoBracket,
    /// The iteration budget ran out before a tolerance was met.
    IterationsExhausted,
    /// The secant estimate repeated exactly across a checkpoint window:
    /// the search is stuck at a floating-point fixed point below both
    /// tolerances' reach.
    Stalled {
        /// Iteration at which the repeat was observed.
        iteration: u32,
        /// The repeating estimate.
        estimate: f64,
    },
}

impl SolverOutcome {
    /// Returns the converged root, if any.
    #[must_use]
    pub fn rate(&self) -> Option<f64> {
        match self {
            SolverOutcome::Converged(result) => Some(result.root),
            _ => None,
        }
    }

    /// Returns true if the search converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, SolverOutcome::Converged(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_config_builders() {
        let config = SolverConfig::default()
            .with_x_tolerance(1e-8)
            .with_y_tolerance(1e-9)
            .with_max_iterations(50);

        assert!((config.x_tolerance - 1e-8).abs() < f64::EPSILON);
        assert!((config.y_tolerance - 1e-9).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    #[test]
    fn test_outcome_rate_accessor() {
        let converged = SolverOutcome::Converged(SolverResult {
            root: 0.25,
            iterations: 7,
            residual: 1e-9,
        });
        assert_eq!(converged.rate(), Some(0.25));
        assert!(converged.is_converged());

        assert_eq!(SolverOutcome::NoBracket.rate(), None);
        assert_eq!(SolverOutcome::IterationsExhausted.rate(), None);
        assert!(!SolverOutcome::Stalled {
            iteration: 200,
            estimate: 0.5
        }
        .is_converged());
    }
}
