use super::{Board, Colour};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Colour),
    Draw,
}

/// Turn flow over a single board: whose move it is and whether the game
/// has finished.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current: Colour,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Start a game on `board` (which is cleared) with `starter` to move.
    pub fn new(mut board: Board, starter: Colour) -> Self {
        board.clear();
        GameState {
            board,
            current: starter,
            outcome: None,
        }
    }

    /// Standard 6x7 game with Black to move
    pub fn initial() -> Self {
        Self::new(Board::new(), Colour::Black)
    }

    /// Get colour to move
    pub fn current_colour(&self) -> Colour {
        self.current
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns()
    }

    /// Drop the current colour's piece into `column` and pass the turn.
    pub fn apply_move(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let row = self
            .board
            .drop_piece(column, self.current)?
            .ok_or(MoveError::ColumnFull(column))?;

        if self.board.connects_four(row, column)? {
            self.outcome = Some(GameOutcome::Winner(self.current));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current = self.current.opposite();

        Ok(())
    }

    /// Clear the board for a new game.
    pub fn reset(&mut self, starter: Colour) {
        self.board.clear();
        self.current = starter;
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_colour(), Colour::Black);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_columns().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let mut state = GameState::initial();
        state.apply_move(3).unwrap();

        assert_eq!(state.current_colour(), Colour::White);
        assert_eq!(state.board().colour_at(0, 3).unwrap(), Some(Colour::Black));
    }

    #[test]
    fn test_new_clears_board() {
        let mut board = Board::new();
        board.place(Colour::White, 0).unwrap();
        let state = GameState::new(board, Colour::White);
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_colour(), Colour::White);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Black wins along the bottom row
        for col in 0..4 {
            state.apply_move(col).unwrap();
            if col < 3 {
                state.apply_move(col).unwrap();
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Colour::Black)));
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
        assert!(state.legal_columns().is_empty());
    }

    #[test]
    fn test_draw_on_full_board() {
        let mut state = GameState::new(Board::with_size(2, 2).unwrap(), Colour::Black);
        for col in [0, 0, 1, 1] {
            state.apply_move(col).unwrap();
        }
        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
    }

    #[test]
    fn test_rejects_bad_columns() {
        let mut state = GameState::new(Board::with_size(1, 4).unwrap(), Colour::Black);
        state.apply_move(0).unwrap();
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(
            state.apply_move(7),
            Err(MoveError::InvalidColumn(BoardError::InvalidColumn {
                column: 7,
                columns: 4
            }))
        );
        // failed moves don't pass the turn
        assert_eq!(state.current_colour(), Colour::White);
    }

    #[test]
    fn test_reset() {
        let mut state = GameState::initial();
        state.apply_move(2).unwrap();
        state.reset(Colour::White);
        assert_eq!(state.board(), &Board::new());
        assert_eq!(state.current_colour(), Colour::White);
        assert!(state.outcome().is_none());
    }
}
