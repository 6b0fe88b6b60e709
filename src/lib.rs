//! Evil Hangman
//!
//! A hangman game that cheats: the hidden word is never fixed. After every guessed
//! letter the game splits its remaining candidate words by where that letter would
//! appear and keeps the largest family, so the player faces the hardest word
//! consistent with everything shown so far.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::core::{CandidateSet, Letter};
//! use evil_hangman::game::Session;
//! use evil_hangman::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::parse("code cold core cove");
//! let candidates = CandidateSet::new(dictionary.with_length(4)).unwrap();
//! let mut session = Session::new(candidates, 3);
//!
//! let outcome = session.guess(Letter::new('d').unwrap()).unwrap();
//! assert!(outcome.budget_spent);
//! assert_eq!(session.candidates().len(), 2);
//! assert_eq!(session.mask().to_string(), "----");
//! ```

// Core domain types
pub mod core;

// Partition engine
pub mod engine;

// Session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
