//! The candidate store
//!
//! Holds every word still consistent with what the player has seen.

use super::{Letter, Pattern, Word};
use crate::engine;
use thiserror::Error;

/// Ordered, non-empty set of equal-length candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    words: Vec<Word>,
    word_length: usize,
}

/// Error type for an invalid candidate set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CandidateError {
    #[error("no candidate words")]
    Empty,
    #[error("candidate '{word}' has {found} letters, expected {expected}")]
    MixedLengths {
        word: String,
        expected: usize,
        found: usize,
    },
}

impl CandidateSet {
    /// Build a candidate set from words that all share one length
    ///
    /// # Errors
    /// Returns `CandidateError::Empty` for no words and
    /// `CandidateError::MixedLengths` if lengths differ.
    pub fn new(words: Vec<Word>) -> Result<Self, CandidateError> {
        let word_length = words.first().ok_or(CandidateError::Empty)?.len();

        if let Some(odd) = words.iter().find(|w| w.len() != word_length) {
            return Err(CandidateError::MixedLengths {
                word: odd.text().to_string(),
                expected: word_length,
                found: odd.len(),
            });
        }

        Ok(Self { words, word_length })
    }

    /// Length every candidate shares
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; see [`CandidateSet::new`]
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First candidate in engine order
    #[must_use]
    pub fn first(&self) -> &Word {
        &self.words[0]
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    /// Keep only the largest family for `letter`
    ///
    /// Returns the pattern shared by the kept family together with the
    /// narrowed set, which is never empty.
    #[must_use]
    pub fn narrow(&self, letter: Letter) -> (Pattern, Self) {
        let Some(kept) = engine::partition(&self.words, letter) else {
            unreachable!("candidate sets are never empty");
        };

        let words = kept.words.into_iter().cloned().collect();
        (
            kept.pattern,
            Self {
                words,
                word_length: self.word_length,
            },
        )
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
