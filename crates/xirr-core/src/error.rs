//! Error types for the Xirr library.
//!
//! Only genuine failures are errors. "No rate could be determined" is
//! an ordinary value (`Ok(None)` from the convenience functions, or a
//! non-converged [`SolverOutcome`](xirr_math::solvers::SolverOutcome)
//! variant from the outcome-level API) and never appears here.

use thiserror::Error;

/// A specialized Result type for Xirr operations.
pub type XirrResult<T> = Result<T, XirrError>;

/// The main error type for Xirr operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum XirrError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid cash flow schedule.
    #[error("Invalid cash flow schedule: {reason}")]
    InvalidSchedule {
        /// Description of the invalid schedule.
        reason: String,
    },

    /// The rate search repeated its estimate exactly across a
    /// checkpoint window: stuck below the floating-point precision
    /// floor without satisfying either tolerance.
    #[error("Rate search stalled at iteration {iteration} (estimate: {estimate})")]
    Stalled {
        /// Iteration at which the repeat was observed.
        iteration: u32,
        /// The repeating estimate.
        estimate: f64,
    },
}

impl XirrError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = XirrError::Stalled {
            iteration: 200,
            estimate: 0.5,
        };
        assert!(err.to_string().contains("iteration 200"));

        let err = XirrError::invalid_schedule("schedule is empty");
        assert!(err.to_string().contains("empty"));
    }
}
