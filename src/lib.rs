//! # Connect Four AI
//!
//! A drop-piece four-in-a-row game with computer opponents built from a
//! cascade of tactical heuristics rather than full game-tree search.
//!
//! ## Modules
//!
//! - [`game`]: Board, colours, turn flow and session history
//! - [`ai`]: Threat engine, bad-column analysis and the Random / Easy /
//!   Medium / Max strategies
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
