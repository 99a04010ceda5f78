//! Tactical column classification.
//!
//! Vocabulary:
//!
//! - **Threat**: a column in which a colour wins with a single move.
//! - **N-way**: a move creating two or more simultaneous threats; only one
//!   can be blocked, so it wins a turn later.
//! - **Consequential**: a move creating a single threat whose forced block
//!   hands the mover a further win (threat, n-way or another consequential).
//! - **Setup**: a move that makes an n-way or consequential available next
//!   turn which top-level analysis would not otherwise report.
//!
//! Every function works on snapshots of the board it is given and returns
//! columns in ascending order.

use std::fmt;

use crate::game::{Board, Colour};

/// Engine tuning shared by all strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Emit human-readable trace lines at `debug` level.
    pub debug: bool,
    /// Nesting limit for consequential lookahead.
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            debug: false,
            max_depth: 16,
        }
    }
}

/// Columns in which `colour` would win immediately by playing.
pub fn threats(board: &Board, colour: Colour) -> Vec<usize> {
    (0..board.columns())
        .filter(|&column| is_threat(board, column, colour))
        .collect()
}

/// Non-full columns that don't hand the opponent an immediate win.
pub fn potential_moves(board: &Board, colour: Colour) -> Vec<usize> {
    board
        .legal_columns()
        .into_iter()
        .filter(|&column| {
            board
                .with_move(colour, column)
                .is_some_and(|(next, _)| threats(&next, colour.opposite()).is_empty())
        })
        .collect()
}

fn is_threat(board: &Board, column: usize, colour: Colour) -> bool {
    board
        .with_move(colour, column)
        .is_some_and(|(next, row)| next.line_through(row, column))
}

/// Lookahead heuristics evaluated on behalf of one AI colour.
///
/// The AI colour matters for top-level calls: an opponent n-way or
/// consequential the AI cannot block is not reported.
#[derive(Debug, Clone)]
pub struct ThreatEngine {
    ai: Colour,
    config: EngineConfig,
}

impl ThreatEngine {
    pub fn new(ai: Colour, config: &EngineConfig) -> Self {
        ThreatEngine {
            ai,
            config: *config,
        }
    }

    pub fn ai_colour(&self) -> Colour {
        self.ai
    }

    /// Immediate wins for `colour`, traced.
    pub fn threats(&self, board: &Board, colour: Colour) -> Vec<usize> {
        let found = threats(board, colour);
        for column in &found {
            self.trace(format_args!("{colour} threat @ {column}"));
        }
        found
    }

    pub fn potential_moves(&self, board: &Board, colour: Colour) -> Vec<usize> {
        potential_moves(board, colour)
    }

    /// Safe columns in which `colour` creates more than one threat at once.
    pub fn n_ways(&self, board: &Board, colour: Colour, top_level: bool) -> Vec<usize> {
        potential_moves(board, colour)
            .into_iter()
            .filter(|&column| {
                let Some((next, _)) = board.with_move(colour, column) else {
                    return false;
                };
                if threats(&next, colour).len() < 2 {
                    return false;
                }
                self.trace(format_args!(
                    "{} found n-way for {colour} at {column}",
                    self.ai
                ));
                !self.is_unblockable(board, colour, column, top_level)
            })
            .collect()
    }

    /// Safe columns in which `colour` creates a single threat whose forced
    /// block leads to a further win.
    pub fn consequentials(&self, board: &Board, colour: Colour, top_level: bool) -> Vec<usize> {
        self.consequentials_within(board, colour, top_level, 0)
    }

    fn consequentials_within(
        &self,
        board: &Board,
        colour: Colour,
        top_level: bool,
        depth: usize,
    ) -> Vec<usize> {
        if depth >= self.config.max_depth {
            self.trace(format_args!(
                "consequential search for {colour} cut off at depth {depth}"
            ));
            return Vec::new();
        }

        potential_moves(board, colour)
            .into_iter()
            .filter(|&column| {
                let Some((mut next, _)) = board.with_move(colour, column) else {
                    return false;
                };
                let own = threats(&next, colour);
                if own.len() != 1 {
                    return false;
                }

                let blocked = own[0];
                if next.drop_unchecked(blocked, colour.opposite()).is_none() {
                    return false;
                }

                let follow_up = is_threat(&next, blocked, colour)
                    || !self.n_ways(&next, colour, false).is_empty()
                    || !self
                        .consequentials_within(&next, colour, false, depth + 1)
                        .is_empty();
                if !follow_up {
                    return false;
                }

                self.trace(format_args!(
                    "{} found consequential win for {colour} at {column}, unlocked by block at {blocked}",
                    self.ai
                ));
                !self.is_unblockable(board, colour, column, top_level)
            })
            .collect()
    }

    /// Safe columns after which (and after the opponent blocks any single
    /// threat they create) `colour` has an n-way or consequential that only
    /// nested analysis can see.
    pub fn setups(&self, board: &Board, colour: Colour) -> Vec<usize> {
        potential_moves(board, colour)
            .into_iter()
            .filter(|&column| {
                let Some((mut next, _)) = board.with_move(colour, column) else {
                    return false;
                };
                if let Some(&threat) = threats(&next, colour).first() {
                    next.drop_unchecked(threat, colour.opposite());
                }

                let hidden_n_way = !self.n_ways(&next, colour, false).is_empty()
                    && self.n_ways(&next, colour, true).is_empty();
                let found = hidden_n_way
                    || (!self.consequentials(&next, colour, false).is_empty()
                        && self.consequentials(&next, colour, true).is_empty());

                if found {
                    self.trace(format_args!(
                        "{} found setup for {colour} at {column}",
                        self.ai
                    ));
                }
                found
            })
            .collect()
    }

    /// At top level, an opponent move is unblockable when the AI playing
    /// the same column still leaves the opponent a threat.
    fn is_unblockable(
        &self,
        board: &Board,
        colour: Colour,
        column: usize,
        top_level: bool,
    ) -> bool {
        if !top_level || colour != self.ai.opposite() {
            return false;
        }
        let unblockable = board
            .with_move(self.ai, column)
            .is_some_and(|(next, _)| !threats(&next, colour).is_empty());
        if unblockable {
            self.trace(format_args!("but can't do anything"));
        }
        unblockable
    }

    pub(crate) fn trace(&self, message: fmt::Arguments<'_>) {
        if self.config.debug {
            log::debug!("{message}");
        }
    }
}
