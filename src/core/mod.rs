//! Core domain types for word matching
//!
//! Case-insensitive word helpers, fixed-letter pattern specs and the query
//! built from the command line. Everything here is pure.

mod pattern;
mod query;
mod word;

pub use pattern::{FixedLetterSpec, PatternQuery, WILDCARD};
pub use query::{Mode, Query, validate_letters};
pub use word::{char_len, eq_ignore_case, fold};

pub(crate) use word::letter_counts;
