//! Command-line argument validation
//!
//! Arguments are checked in a fixed order, stopping at the first failure:
//! 1. exactly three arguments: `MODE DICTIONARY LETTERS`
//! 2. no digits in the letters
//! 3. no punctuation other than `_` in the letters
//! 4. mode is `A` or `P`
//! 5. the dictionary is an existing, non-empty file
//!
//! Nothing is loaded or scanned until all five pass.

use std::path::PathBuf;

use crate::core::{Mode, Query, validate_letters};
use crate::dictionary::check_path;
use crate::error::InvocationError;

/// A fully validated command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub mode: Mode,
    pub dictionary_path: PathBuf,
    pub letters: String,
}

impl Invocation {
    /// Validate raw positional arguments
    ///
    /// # Errors
    /// Returns the `InvocationError` for the first rule that fails.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, InvocationError> {
        let [mode, path, letters] = args else {
            return Err(InvocationError::ArgumentCount { found: args.len() });
        };
        let (mode, path, letters) = (mode.as_ref(), path.as_ref(), letters.as_ref());

        validate_letters(letters)?;

        let mode = Mode::from_arg(mode).ok_or_else(|| InvocationError::InvalidMode {
            mode: mode.to_string(),
        })?;

        let dictionary_path = PathBuf::from(path);
        check_path(&dictionary_path)?;

        tracing::debug!(%mode, path = %dictionary_path.display(), letters, "arguments accepted");

        Ok(Self {
            mode,
            dictionary_path,
            letters: letters.to_string(),
        })
    }

    /// Build the query this invocation asks for
    #[must_use]
    pub fn query(&self) -> Query {
        Query::build(self.mode, &self.letters)
    }
}
