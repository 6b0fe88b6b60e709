//! Adversarial partition engine
//!
//! After every guess the engine splits the candidate words into families that
//! share a reveal pattern, and keeps the biggest family alive.

mod partition;

pub use partition::{Partition, PatternGroup, group_by_pattern, partition, select_largest};
