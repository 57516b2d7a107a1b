//! Fixed-letter pattern queries
//!
//! A pattern such as `ca_` fixes letters at some positions of a word slot and
//! leaves the wildcard positions (`_`) unconstrained.

use crate::error::MalformedSpecError;

use super::word::char_len;

/// Placeholder for an unconstrained position
pub const WILDCARD: char = '_';

/// Letters pinned to positions of a word slot
///
/// Positions are character indices, kept sorted ascending and distinct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedLetterSpec {
    letters: Vec<(usize, char)>,
}

impl FixedLetterSpec {
    /// Record every non-wildcard character of `pattern` with its index
    ///
    /// Never fails: any string yields a well-formed spec for its own length.
    ///
    /// # Examples
    /// ```
    /// use crossword_helper::core::FixedLetterSpec;
    ///
    /// let spec = FixedLetterSpec::from_pattern("ca_");
    /// assert_eq!(spec.iter().collect::<Vec<_>>(), vec![(0, 'c'), (1, 'a')]);
    /// ```
    #[must_use]
    pub fn from_pattern(pattern: &str) -> Self {
        let letters = pattern
            .chars()
            .enumerate()
            .filter(|&(_, ch)| ch != WILDCARD)
            .collect();
        Self { letters }
    }

    /// Build a spec from explicit `(position, letter)` pairs for a slot of `length`
    ///
    /// # Errors
    /// Returns `MalformedSpecError` if a position is `>= length` or appears twice.
    pub fn new(
        pairs: impl IntoIterator<Item = (usize, char)>,
        length: usize,
    ) -> Result<Self, MalformedSpecError> {
        let mut letters: Vec<(usize, char)> = pairs.into_iter().collect();
        letters.sort_unstable_by_key(|&(position, _)| position);

        let spec = Self { letters };
        spec.validate(length)?;
        Ok(spec)
    }

    /// Check that every position fits a slot of `length` and none repeats
    ///
    /// # Errors
    /// Returns `MalformedSpecError` describing the first offending position.
    pub fn validate(&self, length: usize) -> Result<(), MalformedSpecError> {
        if let Some(pair) = self.letters.windows(2).find(|w| w[0].0 == w[1].0) {
            return Err(MalformedSpecError::DuplicatePosition {
                position: pair[0].0,
            });
        }

        if let Some(&(position, _)) = self.letters.last()
            && position >= length
        {
            return Err(MalformedSpecError::PositionOutOfRange { position, length });
        }

        Ok(())
    }

    /// Iterate `(position, letter)` pairs in ascending position order
    pub fn iter(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.letters.iter().copied()
    }

    /// Number of fixed letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// True for a pure-wildcard pattern
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Slot length plus the letters fixed within it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternQuery {
    length: usize,
    fixed: FixedLetterSpec,
}

impl PatternQuery {
    /// Parse a raw pattern string such as `c_t`
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self {
            length: char_len(pattern),
            fixed: FixedLetterSpec::from_pattern(pattern),
        }
    }

    /// Pair an explicit spec with a slot length
    ///
    /// # Errors
    /// Returns `MalformedSpecError` if the spec does not fit `length`.
    pub fn with_spec(fixed: FixedLetterSpec, length: usize) -> Result<Self, MalformedSpecError> {
        fixed.validate(length)?;
        Ok(Self { length, fixed })
    }

    /// Required word length
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Fixed letters of the slot
    #[inline]
    #[must_use]
    pub const fn fixed(&self) -> &FixedLetterSpec {
        &self.fixed
    }
}
