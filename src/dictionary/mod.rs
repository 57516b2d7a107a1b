//! Dictionary word lists
//!
//! A dictionary is the ordered list of lines of a text file, loaded once and
//! read-only afterwards. Order and duplicates are preserved.

pub mod loader;

pub use loader::{check_path, load_from_file};

/// Ordered, immutable word list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary from lines, one word per line
    ///
    /// # Examples
    /// ```
    /// use crossword_helper::dictionary::Dictionary;
    ///
    /// let dict = Dictionary::from_lines(["cat", "dog", "cat"]);
    /// assert_eq!(dict.len(), 3);
    /// ```
    #[must_use]
    pub fn from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            words: lines.into_iter().map(str::to_string).collect(),
        }
    }

    /// Parse file contents, splitting on `\n` or `\r\n`
    #[must_use]
    pub fn parse(contents: &str) -> Self {
        Self::from_lines(contents.lines())
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
