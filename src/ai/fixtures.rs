//! Positions shared by the engine and strategy tests.

use crate::ai::Agent;
use crate::game::Colour::{self, Black, White};
use crate::game::Board;

/// Repeat count for checks that must hold on every draw, not just usually.
pub(crate) const RETRIES: u64 = 10;

pub(crate) fn board_from(moves: &[(Colour, usize)]) -> Board {
    let mut board = Board::new();
    for &(colour, column) in moves {
        assert!(board.place(colour, column).unwrap(), "column {column} full");
    }
    board
}

/// Build a board of any size from text rows, top row first, using the
/// symbols the board prints (`X` Black, `O` White, `.` empty).
pub(crate) fn board_from_rows(rows: &[&str]) -> Board {
    let mut board = Board::with_size(rows.len(), rows[0].len()).unwrap();
    for (row, line) in rows.iter().rev().enumerate() {
        for (column, cell) in line.chars().enumerate() {
            let colour = match cell {
                'X' => Black,
                'O' => White,
                _ => continue,
            };
            assert_eq!(
                board.drop_piece(column, colour).unwrap(),
                Some(row),
                "piece at ({row}, {column}) is floating"
            );
        }
    }
    board
}

/// Black to move; White wins along row 1 if Black plays column 4
/// (row 0), and can't be stopped.
pub(crate) fn unblockable_white_n_way() -> Board {
    board_from(&[
        (Black, 0),
        (White, 3),
        (Black, 1),
        (White, 5),
        (Black, 2),
        (White, 3),
        (Black, 0),
        (White, 2),
        (Black, 2),
        (White, 5),
    ])
}

/// Black can force a win at column 4 through a chain of blocked threats.
pub(crate) fn consequential_for_black() -> Board {
    board_from(&[
        (White, 0),
        (White, 1),
        (Black, 2),
        (White, 3),
        (Black, 4),
        (Black, 0),
        (Black, 1),
        (White, 2),
        (White, 3),
        (Black, 4),
        (White, 1),
        (Black, 2),
        (Black, 3),
        (White, 2),
        (Black, 3),
        (White, 3),
    ])
}

/// Black's consequential at column 3 needs three levels of nesting.
pub(crate) fn deep_consequential_for_black() -> Board {
    board_from(&[
        (Black, 2),
        (White, 0),
        (Black, 3),
        (White, 6),
        (Black, 0),
        (White, 1),
        (Black, 1),
        (White, 5),
        (Black, 0),
        (White, 0),
    ])
}

/// White to move; Black has setups at column 2 only.
pub(crate) fn black_setup() -> Board {
    board_from(&[
        (Black, 0),
        (White, 3),
        (Black, 5),
        (White, 4),
        (Black, 0),
        (White, 6),
        (Black, 4),
        (White, 4),
        (Black, 2),
        (White, 5),
        (Black, 1),
        (White, 5),
        (Black, 4),
    ])
}

/// Black holds columns 1 and 3 of row 0: column 2 makes two threats.
pub(crate) fn open_n_way_for_black() -> Board {
    board_from(&[(Black, 1), (Black, 3)])
}

/// Every column `agent` picks for `colour` on `board` over [`RETRIES`] calls.
pub(crate) fn choices(agent: &mut dyn Agent, board: &Board, colour: Colour) -> Vec<usize> {
    let mut picked: Vec<usize> = (0..RETRIES)
        .map(|_| agent.choose_column(board, colour).unwrap())
        .collect();
    picked.sort_unstable();
    picked.dedup();
    picked
}
