//! Bad-column detection for the random fallback of the deeper strategies.
//!
//! A column is bad when the AI playing there hands the opponent an
//! immediate win, or a danger within the given scope, unless the AI's own
//! resulting threat forces a block that removes the danger again.

use rand::seq::IndexedRandom;
use rand::Rng;

use super::agent::random_legal;
use super::threats::threats;
use super::ThreatEngine;
use crate::error::EngineError;
use crate::game::Board;

/// Which opponent dangers make a column bad, beyond immediate wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DangerScope {
    /// Opponent n-ways.
    NWays,
    /// Opponent n-ways, consequentials and setups.
    Everything,
}

/// Non-full columns that are not bad for the engine's AI colour.
pub fn safe_columns(engine: &ThreatEngine, board: &Board, scope: DangerScope) -> Vec<usize> {
    board
        .legal_columns()
        .into_iter()
        .filter(|&column| !is_bad_column(engine, board, column, scope))
        .collect()
}

/// Whether the engine's AI colour should avoid `column`. Full or
/// out-of-range columns are never reported bad.
pub fn is_bad_column(
    engine: &ThreatEngine,
    board: &Board,
    column: usize,
    scope: DangerScope,
) -> bool {
    if board.is_column_full(column) {
        return false;
    }
    let Some((next, _)) = board.with_move(engine.ai_colour(), column) else {
        return false;
    };
    let opponent = engine.ai_colour().opposite();

    if !threats(&next, opponent).is_empty() {
        engine.trace(format_args!("{column} would allow win"));
        return true;
    }

    let danger = |b: &Board| {
        !engine.n_ways(b, opponent, true).is_empty()
            || (scope == DangerScope::Everything
                && (!engine.consequentials(b, opponent, true).is_empty()
                    || !engine.setups(b, opponent).is_empty()))
    };
    if !danger(&next) {
        return false;
    }
    if neutralised(engine, &next, &danger) {
        engine.trace(format_args!("{column} is safe: the forced block removes the danger"));
        return false;
    }
    engine.trace(format_args!("{column} allows {opponent} a forced win or setup"));
    true
}

/// Whether the AI's threat on `after`, once the opponent blocks it, leaves
/// the opponent with no threat and without `danger`.
///
/// An opponent n-way or consequential on `after` can only sit in the
/// blocking column and so survives the block; only setups get cleared.
fn neutralised(engine: &ThreatEngine, after: &Board, danger: &dyn Fn(&Board) -> bool) -> bool {
    let ai = engine.ai_colour();
    let Some(&threat) = threats(after, ai).first() else {
        return false;
    };
    let Some((blocked, _)) = after.with_move(ai.opposite(), threat) else {
        return false;
    };
    threats(&blocked, ai.opposite()).is_empty() && !danger(&blocked)
}

/// Random pick restricted to safe columns when any exist.
pub(crate) fn pick_avoiding_bad<R: Rng + ?Sized>(
    engine: &ThreatEngine,
    board: &Board,
    scope: DangerScope,
    rng: &mut R,
) -> Result<usize, EngineError> {
    let safe = safe_columns(engine, board, scope);
    if let Some(&column) = safe.choose(&mut *rng) {
        engine.trace(format_args!("safe columns {safe:?}: chose {column}"));
        return Ok(column);
    }
    random_legal(board, rng)
}
