//! Anagram matching

use crate::core::{char_len, fold, letter_counts};

/// Check whether `candidate` is a rearrangement of the letters of `query`
///
/// Comparison ignores case. Empty words never match, not even each other.
///
/// # Algorithm
/// 1. Reject empty words and words of different lengths
/// 2. Count the folded letters of `candidate` into a consumable pool
/// 3. Take one occurrence from the pool for each letter of `query`,
///    stopping at the first letter the pool cannot supply
///
/// # Examples
/// ```
/// use crossword_helper::matcher::is_anagram;
///
/// assert!(is_anagram("Silent", "LISTEN"));
/// assert!(!is_anagram("banana", "listen"));
/// assert!(!is_anagram("", ""));
/// ```
#[must_use]
pub fn is_anagram(candidate: &str, query: &str) -> bool {
    if candidate.is_empty() || query.is_empty() || char_len(candidate) != char_len(query) {
        return false;
    }

    let mut pool = letter_counts(candidate);

    for letter in query.chars().map(fold) {
        match pool.get_mut(&letter) {
            Some(count) if *count > 0 => *count -= 1,
            _ => return false,
        }
    }

    // Equal lengths leave the pool drained here
    pool.values().all(|&count| count == 0)
}
