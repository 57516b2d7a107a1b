//! Search modes and queries
//!
//! The letters argument becomes either an anagram query (the letters
//! themselves) or a pattern query (`_` marks free positions).

use std::fmt;

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::error::{CharacterKind, InvocationError};
use crate::matcher::{is_anagram, is_pattern};

use super::pattern::{PatternQuery, WILDCARD};

/// What kind of match to look for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// `A`: rearrangements of the letters
    Anagram,
    /// `P`: fixed letters at fixed positions
    Pattern,
}

impl Mode {
    /// Parse the mode argument, which must be exactly `A` or `P`
    #[must_use]
    pub fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "A" => Some(Self::Anagram),
            "P" => Some(Self::Pattern),
            _ => None,
        }
    }

    /// The command-line flag for this mode
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::Anagram => "A",
            Self::Pattern => "P",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anagram => write!(f, "anagram"),
            Self::Pattern => write!(f, "pattern"),
        }
    }
}

/// A validated query, consumed by a single dictionary scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Anagram(String),
    Pattern(PatternQuery),
}

impl Query {
    /// Build the query for `mode` from the raw letters argument
    #[must_use]
    pub fn build(mode: Mode, letters: &str) -> Self {
        match mode {
            Mode::Anagram => Self::Anagram(letters.to_string()),
            Mode::Pattern => Self::Pattern(PatternQuery::new(letters)),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Anagram(_) => Mode::Anagram,
            Self::Pattern(_) => Mode::Pattern,
        }
    }

    /// Test a dictionary word against this query
    #[inline]
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        match self {
            Self::Anagram(letters) => is_anagram(word, letters),
            Self::Pattern(pattern) => is_pattern(word, pattern.fixed(), pattern.length()),
        }
    }
}

/// Decimal digit in any script (Unicode `Nd`)
fn is_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Unicode punctuation (`Pc`, `Pd`, `Ps`, `Pe`, `Pi`, `Pf`, `Po`)
///
/// Symbols such as `+` or `$` are not punctuation.
fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Reject letters containing digits, or punctuation other than the wildcard
///
/// Digits are checked across the whole argument before punctuation.
///
/// # Errors
/// Returns `InvocationError::InvalidCharacter` naming the first offending character.
pub fn validate_letters(letters: &str) -> Result<(), InvocationError> {
    if let Some(character) = letters.chars().find(|&c| is_digit(c)) {
        return Err(InvocationError::InvalidCharacter {
            kind: CharacterKind::Digit,
            character,
        });
    }

    if let Some(character) = letters
        .chars()
        .find(|&c| c != WILDCARD && is_punctuation(c))
    {
        return Err(InvocationError::InvalidCharacter {
            kind: CharacterKind::Punctuation,
            character,
        });
    }

    Ok(())
}
