//! Simulation command
//!
//! Pits a simple letter-frequency player against the adversary, one game per
//! word length, to show how far the adversary can stretch a game.

use crate::core::{CandidateSet, Letter};
use crate::game::{GameState, Session};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::time::{Duration, Instant};

/// One automated game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatedGame {
    pub word_length: usize,
    pub starting_candidates: usize,
    pub state: GameState,
    pub guesses: Vec<Letter>,
    pub misses: u32,
    pub word: String,
}

/// Results of a simulation run, ordered by word length
#[derive(Debug)]
pub struct SimulationReport {
    pub budget: u32,
    pub games: Vec<SimulatedGame>,
    pub duration: Duration,
}

/// Play one automated game for every word length in `lengths` that has words
///
/// Games are independent and run in parallel.
#[must_use]
pub fn run_simulation(
    dictionary: &Dictionary,
    lengths: RangeInclusive<usize>,
    budget: u32,
) -> SimulationReport {
    let start = Instant::now();

    let playable: Vec<CandidateSet> = lengths
        .filter_map(|length| CandidateSet::new(dictionary.with_length(length)).ok())
        .collect();

    let pb = ProgressBar::new(playable.len() as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▓▒░"),
    );

    let games: Vec<SimulatedGame> = playable
        .into_par_iter()
        .map(|candidates| {
            let game = play_automatically(candidates, budget);
            pb.inc(1);
            game
        })
        .collect();

    pb.finish_with_message("done");

    SimulationReport {
        budget,
        games,
        duration: start.elapsed(),
    }
}

/// Play a whole game with [`choose_letter`] picking every guess
#[must_use]
pub fn play_automatically(candidates: CandidateSet, budget: u32) -> SimulatedGame {
    let word_length = candidates.word_length();
    let starting_candidates = candidates.len();
    let mut session = Session::new(candidates, budget);

    while !session.state().is_over() {
        let Some(letter) = choose_letter(&session) else {
            break;
        };
        if session.guess(letter).is_err() {
            break;
        }
    }

    debug!(
        "length {word_length}: {:?} after {} guesses",
        session.state(),
        session.guessed_letters().len()
    );

    SimulatedGame {
        word_length,
        starting_candidates,
        state: session.state(),
        guesses: session.guessed_letters().to_vec(),
        misses: budget - session.remaining_guesses(),
        word: session.reveal().text().to_string(),
    }
}

/// The unguessed letter contained in the most candidates
///
/// Ties go to the alphabetically first letter. Returns `None` once every
/// letter has been guessed.
#[must_use]
pub fn choose_letter(session: &Session) -> Option<Letter> {
    let candidates = session.candidates();

    Letter::alphabet()
        .filter(|&letter| !session.has_guessed(letter))
        .map(|letter| {
            let count = candidates.iter().filter(|w| w.has_letter(letter)).count();
            (letter, count)
        })
        // min_by_key keeps the first, i.e. alphabetically earliest, of equal counts
        .min_by_key(|&(_, count)| std::cmp::Reverse(count))
        .map(|(letter, _)| letter)
}
