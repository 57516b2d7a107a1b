//! Command implementations

pub mod search;

pub use search::{SearchConfig, SearchResult, run_search, search_dictionary};
