//! Command implementations

pub mod play;
pub mod simulate;

pub use play::{GameSummary, PlayConfig, RevealMode, run_play};
pub use simulate::{SimulatedGame, SimulationReport, choose_letter, run_simulation};
