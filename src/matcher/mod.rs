//! Word matching
//!
//! Two pure predicates decide whether a dictionary word answers a query:
//! - **Anagram**: same letters, any order, ignoring case
//! - **Pattern**: same length, fixed letters at fixed positions
//!
//! [`scan`] applies the query's predicate across a whole dictionary.

mod anagram;
mod pattern;
mod scan;

pub use anagram::is_anagram;
pub use pattern::is_pattern;
pub use scan::{Scan, scan};
