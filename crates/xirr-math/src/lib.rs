//! # Xirr Math
//!
//! Numerical root-finding for the Xirr cash flow analytics library.
//!
//! This crate provides:
//!
//! - **Solvers**: A bracketed secant root finder with dual stopping
//!   tolerances and stall detection
//! - **Tracing**: An injectable, no-op-by-default trace sink for solver
//!   diagnostics
//!
//! ## Design Philosophy
//!
//! - **Outcomes, not exceptions**: non-convergence is a value
//!   ([`solvers::SolverOutcome`]), not an error
//! - **Numerical Stability**: careful handling of flat and inconsistent
//!   regions of the objective

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod solvers;
pub mod trace;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::solvers::{
        secant_bracketed, secant_bracketed_traced, SolverConfig, SolverOutcome, SolverResult,
    };
    pub use crate::trace::{LogTrace, NoOpTrace, TraceSink};
}
