//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_score_result, print_simulation_result, print_statistics, write_statistics,
};
