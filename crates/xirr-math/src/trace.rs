//! Injectable diagnostics for solver runs.
//!
//! The solver reports progress through a [`TraceSink`] capability passed
//! in by the caller instead of writing to a process-wide logger. The
//! default sink is a no-op; [`LogTrace`] forwards to the `log` crate.
//! A sink must never influence computed results.

use crate::solvers::SolverOutcome;

/// Receiver for solver progress diagnostics.
///
/// Implementations must be safe for concurrent solver runs; no ordering
/// is guaranteed between messages from different runs.
pub trait TraceSink: Send + Sync {
    /// Called at each periodic checkpoint during iteration.
    ///
    /// `width` is the current bracket width `|b - a|` and `estimate`
    /// the secant intercept at this iteration.
    fn checkpoint(&self, iteration: u32, width: f64, estimate: f64) {
        let _ = (iteration, width, estimate);
    }

    /// Called once when the search terminates, with the final outcome.
    fn terminated(&self, outcome: &SolverOutcome) {
        let _ = outcome;
    }
}

/// Trace sink that discards all diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpTrace;

impl TraceSink for NoOpTrace {}

/// Trace sink that forwards diagnostics to `log::debug!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTrace;

impl TraceSink for LogTrace {
    fn checkpoint(&self, iteration: u32, width: f64, estimate: f64) {
        log::debug!(
            "secant iteration {}, width {:e}, estimate {}",
            iteration,
            width,
            estimate
        );
    }

    fn terminated(&self, outcome: &SolverOutcome) {
        match outcome {
            SolverOutcome::Converged(result) => log::debug!(
                "secant converged to {} in {} iterations (residual {:e})",
                result.root,
                result.iterations,
                result.residual
            ),
            SolverOutcome::NoBracket => log::debug!("secant found no bracketed root"),
            SolverOutcome::IterationsExhausted => log::debug!("secant iteration budget exhausted"),
            SolverOutcome::Stalled {
                iteration,
                estimate,
            } => log::debug!("secant stalled at iteration {} (estimate {})", iteration, estimate),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    struct Counting {
        checkpoints: AtomicU32,
        terminations: AtomicU32,
    }

    impl TraceSink for Counting {
        fn checkpoint(&self, _iteration: u32, _width: f64, _estimate: f64) {
            self.checkpoints.fetch_add(1, Ordering::Relaxed);
        }

        fn terminated(&self, _outcome: &SolverOutcome) {
            self.terminations.fetch_add(1, Ordering::Relaxed);
        }
    }

    #[test]
    fn test_custom_sink_receives_termination() {
        use crate::solvers::{secant_bracketed_traced, SolverConfig};

        let sink = Counting {
            checkpoints: AtomicU32::new(0),
            terminations: AtomicU32::new(0),
        };
        let f = |x: f64| x * x - 2.0;

        let outcome = secant_bracketed_traced(f, 0.0, 2.0, &SolverConfig::default(), &sink);

        assert!(outcome.rate().is_some());
        assert_eq!(sink.terminations.load(Ordering::Relaxed), 1);
        // Converges in far fewer than 100 iterations, so no checkpoint fires.
        assert_eq!(sink.checkpoints.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_noop_sink_is_silent() {
        // Default trait methods must accept any values without effect.
        NoOpTrace.checkpoint(100, 1.0, 0.5);
        NoOpTrace.terminated(&SolverOutcome::NoBracket);
    }
}
