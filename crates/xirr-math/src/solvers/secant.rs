//! Bracketed secant root-finding algorithm.

use crate::solvers::{SolverConfig, SolverOutcome, SolverResult, STALL_CHECK_INTERVAL};
use crate::trace::{NoOpTrace, TraceSink};

/// Bracketed secant root-finding algorithm.
///
/// Searches for a root of `f` inside `[a, b]` by repeatedly taking the
/// x-intercept of the secant line through the bracket endpoints:
///
/// ```text
/// m_n = a_n - f(a_n) * (b_n - a_n) / (f(b_n) - f(a_n))
/// ```
///
/// and replacing the endpoint whose sign matches `f(m_n)`. Unlike the
/// free-running secant method this keeps the root bracketed, at the
/// cost of requiring a sign change over `[a, b]` up front.
///
/// Requires: `f(a) * f(b) < 0` (opposite signs at endpoints). When the
/// endpoints have the same sign the search returns
/// [`SolverOutcome::NoBracket`] without iterating; a root is simply not
/// guaranteed in the interval, which is not an error.
///
/// Every [`STALL_CHECK_INTERVAL`] iterations the intercept is compared
/// against the one recorded at the previous checkpoint. An exact repeat
/// means the iteration has hit a floating-point fixed point that neither
/// tolerance will ever catch, and the search ends with
/// [`SolverOutcome::Stalled`]. The checkpoint slides: each one
/// re-records the intercept, so estimates are always compared exactly
/// one interval apart rather than against the first checkpoint ever
/// taken, and a freeze that sets in late is still caught one interval
/// after it begins.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - Lower bound of the bracket
/// * `b` - Upper bound of the bracket
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use xirr_math::solvers::{secant_bracketed, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let outcome = secant_bracketed(f, 0.0, 2.0, &SolverConfig::default());
/// let root = outcome.rate().unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn secant_bracketed<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> SolverOutcome
where
    F: Fn(f64) -> f64,
{
    secant_bracketed_traced(f, a, b, config, &NoOpTrace)
}

/// [`secant_bracketed`] with an injectable trace sink.
///
/// The sink receives a progress message at each stall checkpoint and a
/// final message when the search terminates. It never affects the
/// computed outcome.
pub fn secant_bracketed_traced<F>(
    f: F,
    a: f64,
    b: f64,
    config: &SolverConfig,
    trace: &dyn TraceSink,
) -> SolverOutcome
where
    F: Fn(f64) -> f64,
{
    // Non-strict: an exact zero at an endpoint also counts as "no sign
    // change", mirroring the bracket-update tests below.
    if f(a) * f(b) >= 0.0 {
        let outcome = SolverOutcome::NoBracket;
        trace.terminated(&outcome);
        return outcome;
    }

    let mut a_n = a;
    let mut b_n = b;
    let mut checkpoint: Option<f64> = None;

    for n in 1..=config.max_iterations {
        let f_a = f(a_n);
        let f_b = f(b_n);
        let m = a_n - f_a * (b_n - a_n) / (f_b - f_a);
        let f_m = f(m);

        if n % STALL_CHECK_INTERVAL == 0 {
            trace.checkpoint(n, (b_n - a_n).abs(), m);
            #[allow(clippy::float_cmp)]
            if checkpoint == Some(m) {
                let outcome = SolverOutcome::Stalled {
                    iteration: n,
                    estimate: m,
                };
                trace.terminated(&outcome);
                return outcome;
            }
            checkpoint = Some(m);
        }

        // Width first: on a flat objective the residual can sit near
        // zero across the whole bracket.
        let outcome = if (b_n - a_n).abs() < config.x_tolerance
            || f_m.abs() < config.y_tolerance
        {
            Some(SolverOutcome::Converged(SolverResult {
                root: m,
                iterations: n,
                residual: f_m,
            }))
        } else if f_a * f_m < 0.0 {
            b_n = m;
            None
        } else if f_b * f_m < 0.0 {
            a_n = m;
            None
        } else {
            // Same sign on both sides of the intercept: the bracket is
            // numerically inconsistent (flat region, or NaN from an
            // invalid rate). NaN fails every sign test, so it lands
            // here too.
            Some(SolverOutcome::NoBracket)
        };

        if let Some(outcome) = outcome {
            trace.terminated(&outcome);
            return outcome;
        }
    }

    let outcome = SolverOutcome::IterationsExhausted;
    trace.terminated(&outcome);
    outcome
}
