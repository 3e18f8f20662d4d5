//! Derivation rules for the proposal document.
//!
//! Everything here is a pure function of model values: the effective line
//! total and grand total policy on the materials list, and the pipe-length
//! derivation on the survey list.

pub mod common;
pub mod survey;
pub mod totals;

pub use survey::pipe_length;
pub use totals::{calculated_total, display_total, effective_line_total};
