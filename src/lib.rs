//! Crossword Helper
//!
//! Finds dictionary words that are anagrams of a set of letters, or that fit
//! a crossword slot with some letters already filled in.
//!
//! # Quick Start
//!
//! ```rust
//! use crossword_helper::commands::search_dictionary;
//! use crossword_helper::core::{Mode, Query};
//! use crossword_helper::dictionary::Dictionary;
//! use crossword_helper::matcher::Scan;
//!
//! let dict = Dictionary::from_lines(["cat", "car", "can", "dog"]);
//!
//! // `_` leaves a position open
//! let query = Query::build(Mode::Pattern, "ca_");
//! let result = search_dictionary(&dict, &query, Scan::Sequential);
//! assert_eq!(result.matches, vec!["cat", "car", "can"]);
//! ```

// Core domain types
pub mod core;

// Matching predicates and dictionary scan
pub mod matcher;

// Word list loading
pub mod dictionary;

// Argument validation
pub mod invocation;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod error;

pub use error::{DictionaryFileError, InvocationError, MalformedSpecError};
