//! Reporting and persistence
//!
//! Evaluates warning thresholds, renders the terminal block, and appends
//! results to the session CSV.

pub mod csv;
pub mod display;
pub mod warnings;

pub use self::csv::append_result;
pub use display::{print_banner, print_test_result};
pub use warnings::evaluate_warnings;
