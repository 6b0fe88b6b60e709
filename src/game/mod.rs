//! Game session state machine

mod session;

pub use session::{GameState, GuessError, GuessOutcome, Session};
