//! Word search command
//!
//! Loads the dictionary, scans it with the query, and returns the matches.

use std::path::PathBuf;

use crate::core::{Mode, Query};
use crate::dictionary::{Dictionary, load_from_file};
use crate::error::DictionaryFileError;
use crate::invocation::Invocation;
use crate::matcher::{Scan, scan};

/// Configuration for a search
pub struct SearchConfig {
    pub dictionary_path: PathBuf,
    pub query: Query,
    pub scan: Scan,
}

impl SearchConfig {
    #[must_use]
    pub fn new(invocation: &Invocation) -> Self {
        Self {
            dictionary_path: invocation.dictionary_path.clone(),
            query: invocation.query(),
            scan: Scan::Sequential,
        }
    }

    #[must_use]
    pub fn with_scan(mut self, scan: Scan) -> Self {
        self.scan = scan;
        self
    }
}

/// Result of a search
pub struct SearchResult {
    pub mode: Mode,
    /// Matching words, in dictionary order
    pub matches: Vec<String>,
    pub dictionary_size: usize,
}

impl SearchResult {
    /// Number of matches found
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.matches.len()
    }
}

/// Load the configured dictionary and search it
///
/// # Errors
///
/// Returns an error if the dictionary file is missing, empty or unreadable.
pub fn run_search(config: &SearchConfig) -> Result<SearchResult, DictionaryFileError> {
    let dictionary = load_from_file(&config.dictionary_path)?;
    Ok(search_dictionary(&dictionary, &config.query, config.scan))
}

/// Search an already loaded dictionary
#[must_use]
pub fn search_dictionary(dictionary: &Dictionary, query: &Query, strategy: Scan) -> SearchResult {
    let matches: Vec<String> = scan(dictionary, query, strategy)
        .into_iter()
        .map(str::to_string)
        .collect();

    tracing::debug!(
        mode = %query.mode(),
        ?strategy,
        scanned = dictionary.len(),
        matches = matches.len(),
        "scan complete"
    );

    SearchResult {
        mode: query.mode(),
        matches,
        dictionary_size: dictionary.len(),
    }
}
