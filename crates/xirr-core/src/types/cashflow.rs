//! Cash flow types for rate-of-return analytics.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// A dated signed cash flow.
///
/// Outflows (investments) carry negative amounts, inflows (returns)
/// positive amounts, the spreadsheet `XIRR` convention.
///
/// # Example
///
/// ```rust
/// use xirr_core::types::{CashFlow, Date};
///
/// let cf = CashFlow::new(Date::from_ymd(2015, 6, 11).unwrap(), -1000.0);
/// assert!(cf.is_outflow());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    pub date: Date,
    /// Signed amount: negative = outflow, positive = inflow
    pub amount: f64,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: f64) -> Self {
        Self { date, amount }
    }

    /// Returns true if the amount is negative.
    #[must_use]
    pub fn is_outflow(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns true if the amount is positive.
    #[must_use]
    pub fn is_inflow(&self) -> bool {
        self.amount > 0.0
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.date, self.amount)
    }
}

/// An ordered collection of cash flows.
///
/// Callers need not pre-sort by date; day-count normalization sorts a
/// copy before any rate computation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSchedule {
    /// Ordered list of cash flows
    cash_flows: Vec<CashFlow>,
}

impl CashFlowSchedule {
    /// Creates a new empty cash flow schedule.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cash_flows: Vec::new(),
        }
    }

    /// Creates a schedule with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cash_flows: Vec::with_capacity(capacity),
        }
    }

    /// Adds a cash flow to the schedule.
    pub fn push(&mut self, cf: CashFlow) {
        self.cash_flows.push(cf);
    }

    /// Returns the cash flows as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// Returns true if there are no cash flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Returns an iterator over the cash flows.
    pub fn iter(&self) -> impl Iterator<Item = &CashFlow> {
        self.cash_flows.iter()
    }

    /// Returns the total of all cash flows.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.cash_flows.iter().map(|cf| cf.amount).sum()
    }

    /// Sorts cash flows by date (stable).
    pub fn sort_by_date(&mut self) {
        self.cash_flows.sort_by_key(|cf| cf.date);
    }
}

impl FromIterator<CashFlow> for CashFlowSchedule {
    fn from_iter<I: IntoIterator<Item = CashFlow>>(iter: I) -> Self {
        Self {
            cash_flows: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for CashFlowSchedule {
    type Item = CashFlow;
    type IntoIter = std::vec::IntoIter<CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.into_iter()
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.cash_flows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_cash_flow_direction() {
        let out = CashFlow::new(date(2020, 1, 1), -500.0);
        let inflow = CashFlow::new(date(2021, 1, 1), 750.0);

        assert!(out.is_outflow());
        assert!(!out.is_inflow());
        assert!(inflow.is_inflow());
    }

    #[test]
    fn test_schedule_total() {
        let schedule: CashFlowSchedule = [
            CashFlow::new(date(2020, 1, 1), -1000.0),
            CashFlow::new(date(2020, 6, 1), 400.0),
            CashFlow::new(date(2021, 1, 1), 700.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(schedule.len(), 3);
        assert!((schedule.total() - 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_sort_by_date() {
        let mut schedule: CashFlowSchedule = [
            CashFlow::new(date(2021, 1, 1), 700.0),
            CashFlow::new(date(2020, 1, 1), -1000.0),
            CashFlow::new(date(2020, 6, 1), 400.0),
        ]
        .into_iter()
        .collect();

        schedule.sort_by_date();

        let dates: Vec<Date> = schedule.iter().map(|cf| cf.date).collect();
        assert_eq!(dates, vec![date(2020, 1, 1), date(2020, 6, 1), date(2021, 1, 1)]);
    }

    #[test]
    fn test_empty_schedule() {
        let schedule = CashFlowSchedule::new();
        assert!(schedule.is_empty());
        assert_eq!(schedule.total(), 0.0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let schedule: CashFlowSchedule = [
            CashFlow::new(date(2015, 6, 11), -1000.0),
            CashFlow::new(date(2018, 6, 10), 20000.0),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&schedule).unwrap();
        let back: CashFlowSchedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, schedule);
    }
}
