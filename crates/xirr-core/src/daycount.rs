//! Day-count normalization.
//!
//! Rate computation never works with calendar dates directly: a
//! [`NormalizedSchedule`] converts a [`CashFlowSchedule`] once into
//! integer day offsets from the earliest date, sorted ascending. The
//! NPV evaluator then only ever sees validated, pre-sorted data and
//! carries no "is this sorted yet?" flags.
//!
//! Year fractions use ACT/365 Fixed: actual days over a constant
//! 365-day basis, matching the spreadsheet `XIRR` convention.

use crate::error::{XirrError, XirrResult};
use crate::types::CashFlowSchedule;

/// Days per year under the ACT/365 Fixed convention.
pub const YEAR_DAYS: f64 = 365.0;

/// Converts an integer day offset into an ACT/365F year fraction.
#[must_use]
pub fn year_fraction(day_offset: i64) -> f64 {
    day_offset as f64 / YEAR_DAYS
}

/// A cash flow schedule normalized for rate computation.
///
/// Entries are `(day_offset, amount)` pairs, sorted ascending by
/// offset, with the first entry always at offset 0 (the earliest cash
/// flow date). Construction validates non-emptiness; afterwards the
/// schedule is immutable.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSchedule {
    entries: Vec<(i64, f64)>,
}

impl NormalizedSchedule {
    /// Normalizes a cash flow schedule.
    ///
    /// Sorts a copy of the schedule by date (stable, the input is not
    /// mutated) and rebases every date to a day offset from the
    /// earliest one.
    ///
    /// # Errors
    ///
    /// Returns `XirrError::InvalidSchedule` if the schedule is empty.
    pub fn from_schedule(schedule: &CashFlowSchedule) -> XirrResult<Self> {
        let mut sorted = schedule.clone();
        sorted.sort_by_date();

        let first = sorted
            .iter()
            .next()
            .ok_or_else(|| XirrError::invalid_schedule("schedule is empty"))?;
        let t0 = first.date;

        let entries = sorted
            .iter()
            .map(|cf| (t0.days_between(&cf.date), cf.amount))
            .collect();

        Ok(Self { entries })
    }

    /// Returns the normalized `(day_offset, amount)` entries.
    #[must_use]
    pub fn entries(&self) -> &[(i64, f64)] {
        &self.entries
    }

    /// Returns the number of entries (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for the len/is_empty convention.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
