//! Word list loading utilities
//!
//! Provides the [`Dictionary`] type, loaded from a file or from the embedded
//! constant, and filtering by word length.

use super::DICTIONARY;
use crate::core::Word;
use log::info;
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for word list loading
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Every usable word from one word list, in source order
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// The dictionary compiled into the binary
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            words: words_from_slice(DICTIONARY),
        }
    }

    /// Load a word list from a file
    ///
    /// The file is read whole; tokens are separated by any whitespace and
    /// tokens that are not purely alphabetic are skipped.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Read` if the file cannot be opened or read.
    ///
    /// # Examples
    /// ```no_run
    /// use evil_hangman::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::load("dictionary.txt").unwrap();
    /// println!("Loaded {} words", dictionary.len());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let dictionary = Self::parse(&content);
        info!(
            "loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Build a dictionary from whitespace-separated text
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::parse("code cold\ncore 42 co-op cove");
    /// assert_eq!(dictionary.len(), 4);
    /// assert_eq!(dictionary.with_length(4).len(), 4);
    /// ```
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            words: text
                .split_whitespace()
                .filter_map(|token| Word::new(token).ok())
                .collect(),
        }
    }

    /// Words of exactly `length` letters, in dictionary order
    #[must_use]
    pub fn with_length(&self, length: usize) -> Vec<Word> {
        self.words
            .iter()
            .filter(|w| w.len() == length)
            .cloned()
            .collect()
    }

    /// Distinct word lengths present, ascending
    #[must_use]
    pub fn lengths(&self) -> BTreeSet<usize> {
        self.words.iter().map(Word::len).collect()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::words_from_slice;
/// use evil_hangman::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["code", "Cold", "CORE"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CODE");
        assert_eq!(words[1].text(), "COLD");
        assert_eq!(words[2].text(), "CORE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["code", "x-ray", "", "r2d2", "cove"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CODE");
        assert_eq!(words[1].text(), "COVE");
    }

    #[test]
    fn parse_splits_on_any_whitespace() {
        let dictionary = Dictionary::parse("  alpha\tbeta\n\ngamma  delta\r\n");
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["ALPHA", "BETA", "GAMMA", "DELTA"]);
    }

    #[test]
    fn with_length_filters_and_keeps_order() {
        let dictionary = Dictionary::parse("cove tree code sky cold");
        let four: Vec<String> = dictionary
            .with_length(4)
            .iter()
            .map(|w| w.text().to_string())
            .collect();
        assert_eq!(four, ["COVE", "TREE", "CODE", "COLD"]);
        assert!(dictionary.with_length(7).is_empty());
        assert!(dictionary.with_length(0).is_empty());
    }

    #[test]
    fn lengths_are_distinct_and_sorted() {
        let dictionary = Dictionary::parse("cove sky tree a bee");
        assert_eq!(dictionary.lengths().into_iter().collect::<Vec<_>>(), [1, 3, 4]);
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let result = Dictionary::load("definitely/not/here/words.txt");
        assert!(matches!(result, Err(LoadError::Read { .. })));
    }

    #[test]
    fn load_reads_file_contents() {
        let path = std::env::temp_dir().join(format!(
            "evil_hangman_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "code cold\ncore cove\nnot-a-word\n").unwrap();

        let dictionary = Dictionary::load(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 4);
        assert_eq!(dictionary.lengths().len(), 1);
    }

    #[test]
    fn builtin_matches_embedded_list() {
        assert_eq!(Dictionary::builtin().len(), DICTIONARY.len());
    }
}
