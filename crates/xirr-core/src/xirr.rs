//! Annualized internal rate of return for irregular cash flows.
//!
//! The rate search wires the other modules together: normalize the
//! schedule once, close over it with the NPV evaluator, and hand the
//! closure to the bracketed secant solver over a fixed `[0, 10]` rate
//! interval (0% to 1000% annualized).
//!
//! Three levels of API:
//!
//! - [`xirr_outcome`] exposes the full
//!   [`SolverOutcome`](xirr_math::solvers::SolverOutcome), keeping "no
//!   bracketed root" distinct from "budget exhausted"
//! - [`xirr`] collapses both non-converged cases to `None` and turns a
//!   stall into an error
//! - [`xirr_silent`] additionally degrades a stall to `None`
//!
//! Unlike the spreadsheet `XIRR`, no starting guess is taken: the
//! search interval is fixed, so a seed has nothing to influence.

use xirr_math::solvers::{secant_bracketed_traced, SolverConfig, SolverOutcome};
use xirr_math::trace::{NoOpTrace, TraceSink};

use crate::daycount::NormalizedSchedule;
use crate::error::{XirrError, XirrResult};
use crate::npv::net_present_value;
use crate::types::CashFlowSchedule;

/// Rate search interval: 0% to 1000% annualized.
pub const RATE_BRACKET: (f64, f64) = (0.0, 10.0);

/// Iteration budget for the rate search.
pub const MAX_ITERATIONS: u32 = 2000;

/// Runs the rate search and returns the full solver outcome.
///
/// # Errors
///
/// Returns `XirrError::InvalidSchedule` if the schedule is empty. All
/// search-level conditions, including a stall, are reported in the
/// outcome rather than as errors.
pub fn xirr_outcome(schedule: &CashFlowSchedule) -> XirrResult<SolverOutcome> {
    xirr_outcome_traced(schedule, &NoOpTrace)
}

/// [`xirr_outcome`] with an injectable trace sink for solver
/// diagnostics.
pub fn xirr_outcome_traced(
    schedule: &CashFlowSchedule,
    trace: &dyn TraceSink,
) -> XirrResult<SolverOutcome> {
    let normalized = NormalizedSchedule::from_schedule(schedule)?;
    let config = SolverConfig::default().with_max_iterations(MAX_ITERATIONS);
    let (a, b) = RATE_BRACKET;

    Ok(secant_bracketed_traced(
        |rate| net_present_value(rate, &normalized),
        a,
        b,
        &config,
        trace,
    ))
}

/// Annualized internal rate of return of a cash flow schedule.
///
/// Returns `Ok(Some(rate))` on convergence and `Ok(None)` when no rate
/// could be determined inside the search interval, either because the
/// NPV has the same sign at both ends of the bracket or because the
/// iteration budget ran out.
///
/// # Errors
///
/// - `XirrError::InvalidSchedule` for an empty schedule
/// - `XirrError::Stalled` when the search froze below floating-point
///   precision; use [`xirr_silent`] to treat that as `None` instead
///
/// # Example
///
/// ```rust
/// use xirr_core::types::{CashFlow, CashFlowSchedule, Date};
/// use xirr_core::xirr::xirr;
///
/// let schedule: CashFlowSchedule = [
///     CashFlow::new(Date::from_ymd(2019, 1, 1).unwrap(), -1000.0),
///     CashFlow::new(Date::from_ymd(2020, 1, 1).unwrap(), 1210.0),
/// ]
/// .into_iter()
/// .collect();
///
/// let rate = xirr(&schedule).unwrap().expect("root is bracketed");
/// assert!((rate - 0.21).abs() < 1e-4);
/// ```
pub fn xirr(schedule: &CashFlowSchedule) -> XirrResult<Option<f64>> {
    collapse_outcome(xirr_outcome(schedule)?, false)
}

/// [`xirr`] with stall reporting suppressed.
///
/// A stalled search degrades to `Ok(None)`; an empty schedule is still
/// an error.
pub fn xirr_silent(schedule: &CashFlowSchedule) -> XirrResult<Option<f64>> {
    collapse_outcome(xirr_outcome(schedule)?, true)
}

/// Collapses a solver outcome to the convenience-level shape: both
/// no-rate cases become `None`, a stall becomes an error unless
/// `silent`.
fn collapse_outcome(outcome: SolverOutcome, silent: bool) -> XirrResult<Option<f64>> {
    match outcome {
        SolverOutcome::Converged(result) => Ok(Some(result.root)),
        SolverOutcome::NoBracket | SolverOutcome::IterationsExhausted => Ok(None),
        SolverOutcome::Stalled {
            iteration,
            estimate,
        } => {
            if silent {
                Ok(None)
            } else {
                Err(XirrError::Stalled {
                    iteration,
                    estimate,
                })
            }
        }
    }
}
