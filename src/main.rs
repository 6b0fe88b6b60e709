//! Evil Hangman - CLI
//!
//! Hangman against an adversary that keeps switching to the largest family of
//! words consistent with your guesses.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{PlayConfig, RevealMode, run_play, run_simulation},
    output::print_simulation_report,
    wordlists::Dictionary,
};
use log::debug;
use std::io;

#[derive(Parser, Debug)]
#[command(
    name = "evil_hangman",
    about = "Hangman against an adversary that never commits to a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file of whitespace-separated words
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Play one interactive game (default)
    Play {
        /// Show how many candidate words remain after each guess
        #[arg(short, long)]
        debug: bool,

        /// Word length to play with instead of asking
        #[arg(short, long)]
        length: Option<usize>,

        /// Number of missed guesses allowed instead of asking
        #[arg(short, long)]
        guesses: Option<u32>,

        /// Reveal a random surviving word at the end instead of the first one
        #[arg(long)]
        random_reveal: bool,
    },

    /// Let an automated player face the adversary at every word length
    Simulate {
        /// Shortest word length to play
        #[arg(long, default_value = "2")]
        min_length: usize,

        /// Longest word length to play
        #[arg(long, default_value = "12")]
        max_length: usize,

        /// Missed guesses allowed per game
        #[arg(short, long, default_value = "8")]
        guesses: u32,
    },
}

/// Load the dictionary selected by the -w flag
///
/// - "builtin": the list compiled into the binary
/// - "<path>": a custom word list file
fn load_dictionary(wordlist: &str) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "builtin" => Dictionary::builtin(),
        path => Dictionary::load(path)?,
    };

    if dictionary.is_empty() {
        bail!("word list '{wordlist}' contains no usable words");
    }
    Ok(dictionary)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("Command line options: {cli:?}");

    // Word list is read in full before any game starts
    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        debug: false,
        length: None,
        guesses: None,
        random_reveal: false,
    });

    match command {
        Commands::Play {
            debug,
            length,
            guesses,
            random_reveal,
        } => {
            let config = PlayConfig {
                debug,
                word_length: length,
                guesses,
                reveal: if random_reveal {
                    RevealMode::Random
                } else {
                    RevealMode::First
                },
            };
            run_play_command(&dictionary, &config)
        }
        Commands::Simulate {
            min_length,
            max_length,
            guesses,
        } => {
            run_simulate_command(&dictionary, min_length, max_length, guesses);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &Dictionary, config: &PlayConfig) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    run_play(dictionary, config, &mut input, &mut output)?;
    Ok(())
}

fn run_simulate_command(dictionary: &Dictionary, min_length: usize, max_length: usize, guesses: u32) {
    println!(
        "Simulating word lengths {min_length}..={max_length} over {} words...",
        dictionary.len()
    );

    let report = run_simulation(dictionary, min_length..=max_length, guesses);
    print_simulation_report(&report);
}
