//! Dictionary file loading
//!
//! A dictionary file must exist and be non-empty before any query runs.

use std::fs;
use std::path::Path;

use super::Dictionary;
use crate::error::DictionaryFileError;

/// Check that `path` names an existing, non-empty file
///
/// Returns the file size in bytes.
///
/// # Errors
/// - `NotFound` if nothing exists at `path`
/// - `Empty` if the file has zero length
/// - `Io` for any other metadata failure
pub fn check_path<P: AsRef<Path>>(path: P) -> Result<u64, DictionaryFileError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| DictionaryFileError::from_io(path, e))?;

    if metadata.len() == 0 {
        return Err(DictionaryFileError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(metadata.len())
}

/// Load a dictionary, one word per line
///
/// Lines are kept verbatim apart from their terminator.
///
/// # Errors
/// Fails like [`check_path`], or with `Io` if the file cannot be read as UTF-8 text.
///
/// # Examples
/// ```no_run
/// use crossword_helper::dictionary::load_from_file;
///
/// let dict = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", dict.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryFileError> {
    let path = path.as_ref();
    let size = check_path(path)?;

    let contents = fs::read_to_string(path).map_err(|e| DictionaryFileError::from_io(path, e))?;
    let dictionary = Dictionary::parse(&contents);

    tracing::debug!(
        path = %path.display(),
        bytes = size,
        words = dictionary.len(),
        "loaded dictionary"
    );

    Ok(dictionary)
}
