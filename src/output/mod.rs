//! Terminal output formatting
//!
//! Status text for the game loop and pretty-printing of results.

pub mod display;
pub mod formatters;

pub use display::{print_simulation_report, write_game_over};
pub use formatters::{guessed_letters, status_report};
