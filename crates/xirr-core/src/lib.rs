//! # Xirr Core
//!
//! Internal rate of return for irregularly dated cash flows.
//!
//! This crate computes the annualized discount rate at which the net
//! present value of a dated cash flow series is zero, the same quantity
//! as the spreadsheet `XIRR` function:
//!
//! - **Types**: [`types::Date`], [`types::CashFlow`],
//!   [`types::CashFlowSchedule`]
//! - **Day-count normalization**: [`daycount::NormalizedSchedule`],
//!   ACT/365F year fractions from integer day offsets
//! - **Valuation**: [`npv::net_present_value`]
//! - **Rate search**: [`xirr::xirr`] and friends, built on the
//!   bracketed secant solver from `xirr-math`
//!
//! ## Example
//!
//! ```rust
//! use xirr_core::prelude::*;
//!
//! let mut schedule = CashFlowSchedule::new();
//! schedule.push(CashFlow::new(Date::from_ymd(2019, 1, 1).unwrap(), -1000.0));
//! schedule.push(CashFlow::new(Date::from_ymd(2020, 1, 1).unwrap(), 1100.0));
//!
//! let rate = xirr(&schedule).unwrap().expect("root is bracketed");
//! assert!((rate - 0.10).abs() < 1e-4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::uninlined_format_args)]

pub mod daycount;
pub mod error;
pub mod npv;
pub mod types;
pub mod xirr;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycount::NormalizedSchedule;
    pub use crate::error::{XirrError, XirrResult};
    pub use crate::npv::net_present_value;
    pub use crate::types::{CashFlow, CashFlowSchedule, Date};
    pub use crate::xirr::{xirr, xirr_outcome, xirr_outcome_traced, xirr_silent};
    pub use xirr_math::solvers::{SolverOutcome, SolverResult};
}

// Re-export commonly used types at crate root
pub use error::{XirrError, XirrResult};
pub use types::{CashFlow, CashFlowSchedule, Date};
pub use xirr::{xirr, xirr_silent};
