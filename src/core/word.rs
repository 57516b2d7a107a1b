//! Case-insensitive word helpers
//!
//! Words are compared one `char` at a time after folding to lowercase.
//! No other normalization is applied.

use rustc_hash::FxHashMap;

/// Fold a character to lowercase
///
/// Characters whose lowercase form spans several code points keep only the
/// first, so folding never changes a word's length.
#[inline]
#[must_use]
pub fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Compare two characters ignoring case
#[inline]
#[must_use]
pub fn eq_ignore_case(a: char, b: char) -> bool {
    a == b || fold(a) == fold(b)
}

/// Length of a word in characters
#[inline]
#[must_use]
pub fn char_len(word: &str) -> usize {
    word.chars().count()
}

/// Count each folded letter of a word
///
/// Used as the consumable multiset for anagram checks.
#[inline]
pub(crate) fn letter_counts(word: &str) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in word.chars().map(fold) {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}
