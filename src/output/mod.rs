//! Terminal output formatting
//!
//! Match report lines and user-facing diagnostics.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_diagnostic, print_search_result};
