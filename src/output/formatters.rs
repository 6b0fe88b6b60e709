//! Formatting utilities for terminal output

use crate::core::Letter;
use crate::game::Session;

/// Guessed letters run together in guessing order, e.g. `OCD`
#[must_use]
pub fn guessed_letters(letters: &[Letter]) -> String {
    letters.iter().map(|l| l.as_char()).collect()
}

/// The status block printed before every guess
///
/// With `debug` set, the number of surviving candidates is appended.
#[must_use]
pub fn status_report(session: &Session, debug: bool) -> String {
    let mut report = format!(
        "\nRemaining guesses: {}\nGuessed letters: {}\nSolution: {}\n",
        session.remaining_guesses(),
        guessed_letters(session.guessed_letters()),
        session.mask()
    );

    if debug {
        report.push_str(&format!(
            "Remaining words: {}\n",
            session.candidates().len()
        ));
    }

    report
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CandidateSet, Word};

    fn session(budget: u32) -> Session {
        let words = ["code", "cold", "core", "cove"]
            .into_iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        Session::new(CandidateSet::new(words).unwrap(), budget)
    }

    #[test]
    fn status_before_any_guess() {
        let report = status_report(&session(3), false);
        assert_eq!(
            report,
            "\nRemaining guesses: 3\nGuessed letters: \nSolution: ----\n"
        );
    }

    #[test]
    fn status_after_guesses() {
        let mut game = session(3);
        for ch in ['o', 'c', 'd'] {
            game.guess(Letter::new(ch).unwrap()).unwrap();
        }

        let report = status_report(&game, false);
        assert_eq!(
            report,
            "\nRemaining guesses: 2\nGuessed letters: OCD\nSolution: CO--\n"
        );
    }

    #[test]
    fn debug_status_counts_candidates() {
        let mut game = session(3);
        game.guess(Letter::new('d').unwrap()).unwrap();

        let report = status_report(&game, true);
        assert!(report.ends_with("Remaining words: 2\n"));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 10.0, 5), "░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(10.0, 10.0, 5), "█████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(5.0, 10.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }
}
