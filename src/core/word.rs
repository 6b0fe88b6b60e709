//! Dictionary word representation
//!
//! A Word is an immutable run of uppercase ASCII letters of any positive length.

use super::Letter;
use std::fmt;
use thiserror::Error;

/// A dictionary word, normalized to uppercase
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must contain at least one letter")]
    Empty,
    #[error("Word must contain only ASCII letters, found '{0}'")]
    InvalidCharacter(char),
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - The text is empty
    /// - Contains anything other than ASCII letters
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Word;
    ///
    /// let word = Word::new("cove").unwrap();
    /// assert_eq!(word.text(), "COVE");
    /// assert_eq!(word.len(), 4);
    ///
    /// assert!(Word::new("don't").is_err());
    /// assert!(Word::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if let Some(bad) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::InvalidCharacter(bad));
        }

        text.make_ascii_uppercase();
        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as uppercase ASCII bytes
    #[inline]
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.bytes().contains(&letter.as_byte())
    }

    /// Positions (0-based) where a letter appears
    pub fn positions_of(&self, letter: Letter) -> impl Iterator<Item = usize> + '_ {
        self.bytes()
            .iter()
            .enumerate()
            .filter(move |&(_, &b)| b == letter.as_byte())
            .map(|(i, _)| i)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
