//! Error types
//!
//! Every invocation error renders as a two-line diagnostic: a headline
//! naming the bad argument, then a hint on how to fix it.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Rejected command line, detected before the dictionary is scanned
#[derive(Debug, thiserror::Error)]
pub enum InvocationError {
    /// Anything other than exactly `MODE DICTIONARY LETTERS`
    #[error("Invalid number of arguments.\nPlease use the format: crossword_helper [A|P] [dictionary] [letters]")]
    ArgumentCount { found: usize },

    /// Digit or disallowed punctuation in the letters argument
    #[error("Invalid argument(s).\n{kind}")]
    InvalidCharacter { kind: CharacterKind, character: char },

    /// Mode other than `A` or `P`
    #[error("Invalid first argument '{mode}'\nPlease use the format: [A|P]")]
    InvalidMode { mode: String },

    #[error(transparent)]
    Dictionary(#[from] DictionaryFileError),
}

/// Why a letter was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterKind {
    Digit,
    Punctuation,
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit => write!(f, "Numbers or digits are not allowed"),
            Self::Punctuation => write!(f, "Punctuation characters are not allowed"),
        }
    }
}

/// Dictionary file could not be used
#[derive(Debug, thiserror::Error)]
pub enum DictionaryFileError {
    #[error("Invalid second argument '{}'\nFile not found.", .path.display())]
    NotFound { path: PathBuf },

    /// Zero-length file
    #[error(
        "Invalid second argument '{}'\nPlease make sure it is a non-empty readable dictionary file",
        .path.display()
    )]
    Empty { path: PathBuf },

    #[error("Invalid second argument '{}'\n{source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl DictionaryFileError {
    /// Classify an I/O failure on `path`
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Fixed-letter spec that does not fit its word slot
///
/// Pattern strings always produce well-formed specs, so this only surfaces
/// when a spec is assembled by hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedSpecError {
    #[error("fixed letter at position {position} lies outside a word of length {length}")]
    PositionOutOfRange { position: usize, length: usize },

    #[error("position {position} has more than one fixed letter")]
    DuplicatePosition { position: usize },
}
