//! Computer players: the threat engine, bad-column analysis and the four
//! strategies built on them.

mod agent;
mod difficulty;
mod easy;
mod max;
mod medium;
mod random;
pub mod safety;
pub mod threats;

#[cfg(test)]
mod fixtures;

pub use agent::Agent;
pub use difficulty::{Difficulty, PlayerKind};
pub use easy::EasyAgent;
pub use max::MaxAgent;
pub use medium::MediumAgent;
pub use random::RandomAgent;
pub use safety::DangerScope;
pub use threats::{potential_moves, threats, EngineConfig, ThreatEngine};
