//! Fixed-letter pattern matching

use crate::core::{FixedLetterSpec, char_len, eq_ignore_case};

/// Check whether `candidate` fills a slot of `expected_length` with the fixed letters of `spec`
///
/// Letters compare ignoring case; positions absent from `spec` accept anything.
/// An empty spec matches every word of the right length. Positions outside
/// the word never match, but a spec built by [`FixedLetterSpec::new`] or
/// validated against `expected_length` cannot contain them.
///
/// # Examples
/// ```
/// use crossword_helper::core::FixedLetterSpec;
/// use crossword_helper::matcher::is_pattern;
///
/// let spec = FixedLetterSpec::from_pattern("c__");
/// assert!(is_pattern("cat", &spec, 3));
/// assert!(!is_pattern("bat", &spec, 3));
/// assert!(!is_pattern("cart", &spec, 3));
/// ```
#[must_use]
pub fn is_pattern(candidate: &str, spec: &FixedLetterSpec, expected_length: usize) -> bool {
    if char_len(candidate) != expected_length {
        return false;
    }

    // Spec positions ascend, so one forward pass over the candidate suffices
    let mut chars = candidate.chars().enumerate();
    spec.iter().all(|(position, letter)| {
        chars
            .find(|&(index, _)| index == position)
            .is_some_and(|(_, ch)| eq_ignore_case(ch, letter))
    })
}
