//! Display functions for game and command results

use super::formatters::{create_progress_bar, guessed_letters};
use crate::commands::SimulationReport;
use crate::core::Word;
use crate::game::GameState;
use colored::Colorize;
use std::io::{self, Write};

/// Write the end-of-game banner and the revealed word
///
/// # Errors
///
/// Returns any I/O error from `output`.
pub fn write_game_over<W: Write>(output: &mut W, state: GameState, word: &Word) -> io::Result<()> {
    writeln!(output)?;
    match state {
        GameState::Won => writeln!(output, "{}", "You win, congratulations!".green().bold())?,
        _ => writeln!(output, "{}", "You lose, sorry!".red().bold())?,
    }
    writeln!(
        output,
        "The word was \"{}\"",
        word.text().bright_yellow().bold()
    )
}

/// Print the result of a simulation run
pub fn print_simulation_report(report: &SimulationReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if report.games.is_empty() {
        println!("\nNo word lengths in range had any words.");
        return;
    }

    println!(
        "\n📊 {} (budget {} misses)",
        "Games:".bright_cyan().bold(),
        report.budget
    );

    for game in &report.games {
        let outcome = match game.state {
            GameState::Won => "WON ".green().bold(),
            _ => "LOST".red().bold(),
        };
        let misses = create_progress_bar(f64::from(game.misses), f64::from(report.budget), 10);

        println!(
            "   {:>2} letters  {:>5} words  {}  {} {}/{}  {:<12} {}",
            game.word_length,
            game.starting_candidates,
            outcome,
            misses.yellow(),
            game.misses,
            report.budget,
            game.word.bright_white(),
            guessed_letters(&game.guesses).bright_black()
        );
    }

    let won = report
        .games
        .iter()
        .filter(|g| g.state == GameState::Won)
        .count();

    println!("\n📈 {}", "Summary:".bright_cyan().bold());
    println!("   Player won:       {won}/{}", report.games.len());
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_over_mentions_outcome_and_word() {
        let word = Word::new("cove").unwrap();

        let mut won = Vec::new();
        write_game_over(&mut won, GameState::Won, &word).unwrap();
        let won = String::from_utf8(won).unwrap();
        assert!(won.contains("You win, congratulations!"));
        assert!(won.contains("COVE"));

        let mut lost = Vec::new();
        write_game_over(&mut lost, GameState::Lost, &word).unwrap();
        let lost = String::from_utf8(lost).unwrap();
        assert!(lost.contains("You lose, sorry!"));
        assert!(lost.contains("The word was \""));
    }
}
