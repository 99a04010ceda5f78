//! Core Connect Four game logic: board, colours, turn flow and the
//! session win/draw tally.

mod board;
mod colour;
mod history;
mod state;

pub use board::{Board, COLS, ROWS};
pub use colour::Colour;
pub use history::SessionHistory;
pub use state::{GameOutcome, GameState};
