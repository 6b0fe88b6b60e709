//! Reveal pattern of one letter inside one word
//!
//! A pattern has the same length as the word it was computed from. Each position
//! holds the guessed letter where the word has it, and [`BLANK`] everywhere else:
//!
//! ```text
//! word    C O D E      C O L D
//! letter  D            D
//! pattern - - D -      - - - D
//! ```

use super::{Letter, Word};
use std::fmt;
use std::str::FromStr;

/// Placeholder for an unrevealed position, in patterns and masks alike
pub const BLANK: u8 = b'-';

/// Positions a guessed letter occupies in a word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Box<[u8]>);

impl Pattern {
    /// Calculate the pattern that `letter` produces in `word`
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{Letter, Pattern, Word};
    ///
    /// let word = Word::new("code").unwrap();
    /// let pattern = Pattern::of(&word, Letter::new('d').unwrap());
    /// assert_eq!(pattern.to_string(), "--D-");
    /// ```
    #[must_use]
    pub fn of(word: &Word, letter: Letter) -> Self {
        let target = letter.as_byte();
        word.bytes()
            .iter()
            .map(|&b| if b == target { target } else { BLANK })
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw cells, uppercase letters or [`BLANK`]
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.0
    }

    /// Number of positions holding `letter`
    #[must_use]
    pub fn occurrences(&self, letter: Letter) -> usize {
        self.0.iter().filter(|&&b| b == letter.as_byte()).count()
    }

    /// True when no position is revealed
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|&b| b == BLANK)
    }
}

impl FromIterator<u8> for Pattern {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromStr for Pattern {
    type Err = String;

    /// Parse a pattern like `"--D-"`; letters are case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|ch| match ch {
                '-' => Ok(BLANK),
                c if c.is_ascii_alphabetic() => Ok(c.to_ascii_uppercase() as u8),
                _ => Err(format!("Invalid pattern string: {s}")),
            })
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in self.0.iter() {
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}
