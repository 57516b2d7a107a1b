//! Dictionary scan
//!
//! Runs a query's predicate over every dictionary word. Results always come
//! back in dictionary order, whichever strategy is used.

use rayon::prelude::*;

use crate::core::Query;
use crate::dictionary::Dictionary;

/// How to walk the dictionary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Scan {
    /// Single linear pass
    #[default]
    Sequential,
    /// Split across the rayon thread pool
    Parallel,
}

/// Collect every dictionary word that matches `query`, in dictionary order
#[must_use]
pub fn scan<'d>(dictionary: &'d Dictionary, query: &Query, strategy: Scan) -> Vec<&'d str> {
    let words = dictionary.words();

    match strategy {
        Scan::Sequential => words
            .iter()
            .map(String::as_str)
            .filter(|word| query.matches(word))
            .collect(),
        // Collecting into a Vec keeps the source order
        Scan::Parallel => words
            .par_iter()
            .map(String::as_str)
            .filter(|word| query.matches(word))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mode;

    fn dictionary(words: &[&str]) -> Dictionary {
        Dictionary::from_lines(words.iter().copied())
    }

    #[test]
    fn anagram_scan_keeps_dictionary_order() {
        let dict = dictionary(&["listen", "enlist", "silent", "banana", "tinsel"]);
        let query = Query::build(Mode::Anagram, "LISTEN");

        let matches = scan(&dict, &query, Scan::Sequential);
        assert_eq!(matches, vec!["listen", "enlist", "silent", "tinsel"]);
    }

    #[test]
    fn pattern_scan_keeps_dictionary_order() {
        let dict = dictionary(&["cat", "car", "can", "dog"]);
        let query = Query::build(Mode::Pattern, "ca_");

        let matches = scan(&dict, &query, Scan::Sequential);
        assert_eq!(matches, vec!["cat", "car", "can"]);
    }

    #[test]
    fn duplicates_are_reported_each_time() {
        let dict = dictionary(&["cat", "act", "cat"]);
        let query = Query::build(Mode::Anagram, "tac");

        assert_eq!(scan(&dict, &query, Scan::Sequential), vec!["cat", "act", "cat"]);
    }

    #[test]
    fn no_matches_yields_empty() {
        let dict = dictionary(&["cat", "dog"]);
        let query = Query::build(Mode::Pattern, "z__");

        assert!(scan(&dict, &query, Scan::Sequential).is_empty());
    }

    #[test]
    fn parallel_matches_sequential() {
        let words: Vec<String> = (0..5_000)
            .map(|i| match i % 4 {
                0 => format!("cat{}", "s".repeat(i % 3)),
                1 => "act".to_string(),
                2 => "tac".to_string(),
                _ => "dog".to_string(),
            })
            .collect();
        let dict = Dictionary::from_lines(words.iter().map(String::as_str));

        for query in [
            Query::build(Mode::Anagram, "cat"),
            Query::build(Mode::Pattern, "_a_"),
        ] {
            assert_eq!(
                scan(&dict, &query, Scan::Parallel),
                scan(&dict, &query, Scan::Sequential)
            );
        }
    }
}
