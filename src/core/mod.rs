//! Core domain types for Evil Hangman
//!
//! This module contains the fundamental game types: letters, words, reveal patterns,
//! the public solution mask and the candidate set the adversary narrows.
//! Everything here is pure and deterministic.

mod candidates;
mod letter;
mod mask;
mod pattern;
mod word;

pub use candidates::{CandidateError, CandidateSet};
pub use letter::{Letter, LetterError};
pub use mask::Mask;
pub use pattern::{BLANK, Pattern};
pub use word::{Word, WordError};
