use rand::seq::IndexedRandom;
use rand::Rng;

use super::ThreatEngine;
use crate::error::EngineError;
use crate::game::{Board, Colour};

/// Universal interface for all computer players.
///
/// Agents keep no memory between turns: every call is a fresh evaluation of
/// the board passed in. The random number generator they own only breaks
/// ties.
pub trait Agent {
    /// Select a non-full column for `colour` to play on `board`.
    fn choose_column(&mut self, board: &Board, colour: Colour) -> Result<usize, EngineError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// One step of a move-selection cascade: a label for tracing and a lazily
/// evaluated column set.
pub(crate) type Tier<'a> = (&'static str, &'a dyn Fn() -> Vec<usize>);

/// Pick uniformly from the first tier that yields any columns.
pub(crate) fn run_cascade<R: Rng + ?Sized>(
    engine: &ThreatEngine,
    tiers: &[Tier<'_>],
    rng: &mut R,
) -> Option<usize> {
    tiers.iter().find_map(|&(label, tier)| {
        let columns = tier();
        let column = *columns.choose(&mut *rng)?;
        engine.trace(format_args!("{label} {columns:?}: chose {column}"));
        Some(column)
    })
}

/// Uniform pick among all non-full columns.
pub(crate) fn random_legal<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Result<usize, EngineError> {
    board
        .legal_columns()
        .choose(rng)
        .copied()
        .ok_or(EngineError::NoLegalMove)
}
