//! One game of Evil Hangman
//!
//! The session owns the candidate set, the guessed letters, the public mask and
//! the guess budget. [`Session::guess`] is the only transition.

use crate::core::{CandidateSet, Letter, Mask, Pattern, Word};
use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    Won,
    Lost,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// Why a guess was not applied
///
/// A rejected guess leaves the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("the game is already over")]
    GameOver,
    #[error("letter {0} was already guessed")]
    AlreadyGuessed(Letter),
}

/// What a single accepted guess did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub letter: Letter,
    /// Pattern of the family the adversary kept
    pub pattern: Pattern,
    /// Positions newly revealed by this letter
    pub revealed: usize,
    /// True when the guess cost one from the budget
    pub budget_spent: bool,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub state: GameState,
}

/// State of one game
#[derive(Debug, Clone)]
pub struct Session {
    candidates: CandidateSet,
    guessed: Vec<Letter>,
    mask: Mask,
    remaining_guesses: u32,
    state: GameState,
}

impl Session {
    /// Start a game over `candidates` with `budget` wrong guesses allowed
    ///
    /// A budget of zero starts an already lost game.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::{CandidateSet, Letter, Word};
    /// use evil_hangman::game::{GameState, Session};
    ///
    /// let words = ["code", "cold", "core", "cove"]
    ///     .into_iter()
    ///     .map(|w| Word::new(w).unwrap())
    ///     .collect();
    /// let mut session = Session::new(CandidateSet::new(words).unwrap(), 3);
    ///
    /// session.guess(Letter::new('o').unwrap()).unwrap();
    /// assert_eq!(session.mask().to_string(), "-O--");
    /// assert_eq!(session.remaining_guesses(), 3);
    /// assert_eq!(session.state(), GameState::AwaitingGuess);
    /// ```
    #[must_use]
    pub fn new(candidates: CandidateSet, budget: u32) -> Self {
        let mask = Mask::blank(candidates.word_length());
        let state = if budget == 0 {
            GameState::Lost
        } else {
            GameState::AwaitingGuess
        };

        debug!(
            "new session: {} candidates of length {}, budget {budget}",
            candidates.len(),
            candidates.word_length()
        );

        Self {
            candidates,
            guessed: Vec::new(),
            mask,
            remaining_guesses: budget,
            state,
        }
    }

    /// Apply one guessed letter
    ///
    /// Narrows the candidates to the largest family, fills the mask from that
    /// family's pattern and charges the budget if nothing was revealed.
    ///
    /// # Errors
    /// Returns `GuessError::GameOver` once the game has ended and
    /// `GuessError::AlreadyGuessed` for a repeated letter.
    pub fn guess(&mut self, letter: Letter) -> Result<GuessOutcome, GuessError> {
        if self.state.is_over() {
            return Err(GuessError::GameOver);
        }
        if self.guessed.contains(&letter) {
            return Err(GuessError::AlreadyGuessed(letter));
        }

        self.guessed.push(letter);

        let candidates_before = self.candidates.len();
        let (pattern, narrowed) = self.candidates.narrow(letter);
        self.candidates = narrowed;

        let mask = self.mask.update(&pattern, letter);
        let budget_spent = mask == self.mask;
        if budget_spent {
            self.remaining_guesses = self.remaining_guesses.saturating_sub(1);
        }
        let revealed = self.mask.blanks() - mask.blanks();
        self.mask = mask;

        self.state = if self.mask.is_solved() {
            GameState::Won
        } else if self.remaining_guesses == 0 {
            GameState::Lost
        } else {
            GameState::AwaitingGuess
        };

        debug!(
            "guess {letter}: kept {} of {candidates_before} ({pattern}), mask {}, {} guesses left, {:?}",
            self.candidates.len(),
            self.mask,
            self.remaining_guesses,
            self.state
        );

        Ok(GuessOutcome {
            letter,
            pattern,
            revealed,
            budget_spent,
            candidates_before,
            candidates_after: self.candidates.len(),
            state: self.state,
        })
    }

    /// The word shown to the player at the end: the first surviving candidate
    #[must_use]
    pub fn reveal(&self) -> &Word {
        self.candidates.first()
    }

    /// A uniformly random surviving candidate
    pub fn reveal_with<R: Rng + ?Sized>(&self, rng: &mut R) -> &Word {
        self.candidates
            .words()
            .choose(rng)
            .unwrap_or_else(|| self.candidates.first())
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn remaining_guesses(&self) -> u32 {
        self.remaining_guesses
    }

    /// Letters guessed so far, in order
    #[inline]
    #[must_use]
    pub fn guessed_letters(&self) -> &[Letter] {
        &self.guessed
    }

    #[must_use]
    pub fn has_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub const fn mask(&self) -> &Mask {
        &self.mask
    }

    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.candidates.word_length()
    }
}
