//! Single guessed letter

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One uppercase ASCII letter (`A..=Z`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Letter(u8);

/// Error type for rejected letter input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LetterError {
    #[error("expected exactly one letter, got {0} characters")]
    WrongLength(usize),
    #[error("'{0}' is not a letter from A to Z")]
    NotAlphabetic(char),
}

impl Letter {
    /// Create a letter from a character, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `LetterError::NotAlphabetic` for anything outside `a..=z` / `A..=Z`.
    pub const fn new(ch: char) -> Result<Self, LetterError> {
        if ch.is_ascii_alphabetic() {
            Ok(Self((ch as u8).to_ascii_uppercase()))
        } else {
            Err(LetterError::NotAlphabetic(ch))
        }
    }

    /// Parse player input into a letter
    ///
    /// Surrounding whitespace is ignored; what remains must be exactly one
    /// alphabetic character. Case-insensitive.
    ///
    /// # Errors
    /// Returns `LetterError` if the input is empty, longer than one character
    /// or not a letter.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::Letter;
    ///
    /// assert_eq!(Letter::parse(" e ").unwrap().as_char(), 'E');
    /// assert!(Letter::parse("ab").is_err());
    /// assert!(Letter::parse("7").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, LetterError> {
        let trimmed = input.trim();
        let mut chars = trimmed.chars();

        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::new(ch),
            _ => Err(LetterError::WrongLength(trimmed.chars().count())),
        }
    }

    /// The letter as an uppercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// Iterate the alphabet in order
    pub fn alphabet() -> impl Iterator<Item = Self> {
        (b'A'..=b'Z').map(Self)
    }
}

impl FromStr for Letter {
    type Err = LetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
