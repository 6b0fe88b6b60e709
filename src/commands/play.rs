//! Interactive game mode
//!
//! Text-based prompt loop over any reader and writer, so the same code drives a
//! terminal session and scripted tests.

use crate::core::{CandidateSet, Letter, Word};
use crate::game::{GameState, GuessError, Session};
use crate::output::{status_report, write_game_over};
use crate::wordlists::Dictionary;
use anyhow::{Result, bail};
use log::{debug, warn};
use std::io::{BufRead, Write};

/// Which surviving candidate is named at the end of a game
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// First surviving candidate in engine order
    #[default]
    First,
    /// Any surviving candidate, chosen at random
    Random,
}

/// Options for one interactive game
#[derive(Debug, Clone, Default)]
pub struct PlayConfig {
    /// Print the number of surviving candidates with each status
    pub debug: bool,
    /// Skip the word length prompt when this length has words
    pub word_length: Option<usize>,
    /// Skip the guess budget prompt
    pub guesses: Option<u32>,
    pub reveal: RevealMode,
}

/// How a finished game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub state: GameState,
    pub word: Word,
    pub guesses: Vec<Letter>,
    pub remaining_guesses: u32,
}

/// Play one game of Evil Hangman
///
/// # Errors
///
/// Returns an error on I/O failure or if `input` ends before the game does.
pub fn run_play<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    config: &PlayConfig,
    input: &mut R,
    output: &mut W,
) -> Result<GameSummary> {
    let candidates = choose_candidates(dictionary, config.word_length, input, output)?;

    let budget = match config.guesses {
        Some(budget) => budget,
        None => read_number(input, output, "Number of guesses? ")?,
    };

    let mut session = Session::new(candidates, budget);

    while !session.state().is_over() {
        write!(output, "{}", status_report(&session, config.debug))?;
        play_turn(&mut session, input, output)?;
    }

    let word = match config.reveal {
        RevealMode::First => session.reveal().clone(),
        RevealMode::Random => session.reveal_with(&mut rand::rng()).clone(),
    };
    write_game_over(output, session.state(), &word)?;

    Ok(GameSummary {
        state: session.state(),
        word,
        guesses: session.guessed_letters().to_vec(),
        remaining_guesses: session.remaining_guesses(),
    })
}

/// Prompt until one letter is accepted by the session
fn play_turn<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    loop {
        let line = read_line(input, output, "Next letter? ")?;

        let letter = match Letter::parse(&line) {
            Ok(letter) => letter,
            Err(e) => {
                debug!("rejected letter input {line:?}: {e}");
                writeln!(output, "Invalid input!")?;
                continue;
            }
        };

        match session.guess(letter) {
            Ok(_) => return Ok(()),
            Err(GuessError::AlreadyGuessed(letter)) => {
                writeln!(output, "You already guessed {letter}!")?;
            }
            Err(e @ GuessError::GameOver) => bail!(e),
        }
    }
}

/// Settle on a word length that has at least one word
fn choose_candidates<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    preset: Option<usize>,
    input: &mut R,
    output: &mut W,
) -> Result<CandidateSet> {
    if let Some(length) = preset {
        match CandidateSet::new(dictionary.with_length(length)) {
            Ok(candidates) => return Ok(candidates),
            Err(e) => {
                warn!("preset word length {length} unusable: {e}");
                writeln!(output, "There are no words with {length} letters.")?;
            }
        }
    }

    loop {
        let length: usize = read_number(input, output, "Word length? ")?;
        if length == 0 {
            writeln!(output, "Invalid input!")?;
            continue;
        }

        match CandidateSet::new(dictionary.with_length(length)) {
            Ok(candidates) => return Ok(candidates),
            Err(_) => writeln!(output, "There are no words with {length} letters.")?,
        }
    }
}

/// Prompt until the reply parses as a number
fn read_number<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> Result<T>
where
    T: std::str::FromStr,
    R: BufRead,
    W: Write,
{
    loop {
        let line = read_line(input, output, prompt)?;
        if let Ok(value) = line.parse() {
            return Ok(value);
        }
        writeln!(output, "Invalid input!")?;
    }
}

/// Get user input with a prompt
fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input ended before the game finished");
    }

    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn family() -> Dictionary {
        Dictionary::parse("code cold core cove sky")
    }

    fn play(config: &PlayConfig, script: &str) -> (Result<GameSummary>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = run_play(&family(), config, &mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn full_game_is_won() {
        let (result, output) = play(&PlayConfig::default(), "4\n3\no\nc\nd\ne\nr\n");
        let summary = result.unwrap();

        assert_eq!(summary.state, GameState::Won);
        assert_eq!(summary.word.text(), "CORE");
        assert_eq!(summary.remaining_guesses, 2);
        assert_eq!(guesses(&summary), "OCDER");

        assert!(output.contains("Solution: -O--"));
        assert!(output.contains("Solution: CO--"));
        assert!(output.contains("Remaining guesses: 2\nGuessed letters: OCD\nSolution: CO--"));
        assert!(output.contains("You win, congratulations!"));
        assert!(output.contains("CORE"));
    }

    #[test]
    fn running_out_of_guesses_loses() {
        let (result, output) = play(&PlayConfig::default(), "4\n1\nz\n");
        let summary = result.unwrap();

        assert_eq!(summary.state, GameState::Lost);
        assert_eq!(summary.word.text(), "CODE");
        assert_eq!(summary.remaining_guesses, 0);
        assert!(output.contains("You lose, sorry!"));
        assert!(output.contains("The word was \""));
    }

    #[test]
    fn bad_input_is_reprompted() {
        let script = "abc\n0\n7\n4\n2\n1\nx\nx\nzz\nz\n";
        let (result, output) = play(&PlayConfig::default(), script);
        let summary = result.unwrap();

        assert_eq!(summary.state, GameState::Lost);
        assert_eq!(guesses(&summary), "XZ");
        assert_eq!(output.matches("Invalid input!").count(), 4);
        assert_eq!(output.matches("There are no words with 7 letters.").count(), 1);
        assert_eq!(output.matches("You already guessed X!").count(), 1);
    }

    #[test]
    fn zero_budget_ends_without_guessing() {
        let (result, output) = play(&PlayConfig::default(), "3\n0\n");
        let summary = result.unwrap();

        assert_eq!(summary.state, GameState::Lost);
        assert_eq!(summary.word.text(), "SKY");
        assert!(!output.contains("Next letter?"));
    }

    #[test]
    fn debug_mode_prints_candidate_count() {
        let config = PlayConfig {
            debug: true,
            ..PlayConfig::default()
        };
        let (result, output) = play(&config, "4\n1\nz\n");
        result.unwrap();
        assert!(output.contains("Remaining words: 4"));
    }

    #[test]
    fn presets_skip_prompts() {
        let config = PlayConfig {
            word_length: Some(4),
            guesses: Some(1),
            ..PlayConfig::default()
        };
        let (result, output) = play(&config, "q\n");

        assert_eq!(result.unwrap().state, GameState::Lost);
        assert!(!output.contains("Word length?"));
        assert!(!output.contains("Number of guesses?"));
    }

    #[test]
    fn unusable_length_preset_falls_back_to_prompt() {
        let config = PlayConfig {
            word_length: Some(9),
            guesses: Some(1),
            ..PlayConfig::default()
        };
        let (result, output) = play(&config, "3\nq\n");

        assert_eq!(result.unwrap().word.text(), "SKY");
        assert!(output.contains("There are no words with 9 letters."));
        assert!(output.contains("Word length? "));
    }

    #[test]
    fn random_reveal_names_a_survivor() {
        let config = PlayConfig {
            reveal: RevealMode::Random,
            ..PlayConfig::default()
        };
        let (result, _) = play(&config, "4\n1\nd\n");
        let word = result.unwrap().word;
        assert!(word.text() == "CORE" || word.text() == "COVE");
    }

    #[test]
    fn early_end_of_input_is_an_error() {
        let (result, _) = play(&PlayConfig::default(), "4\n3\n");
        assert!(result.is_err());
    }

    fn guesses(summary: &GameSummary) -> String {
        summary.guesses.iter().map(|l| l.as_char()).collect()
    }
}
