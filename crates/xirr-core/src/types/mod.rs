//! Domain types for cash flow analytics.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`CashFlow`]: Dated signed cash flow amount
//! - [`CashFlowSchedule`]: Ordered collection of cash flows

mod cashflow;
mod date;

pub use cashflow::{CashFlow, CashFlowSchedule};
pub use date::Date;
