use std::fmt;

use super::Colour;
use crate::error::BoardError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Length of a winning line.
const LINE: isize = 4;

/// The eight unit directions as (row, column) steps.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular drop-piece grid.
///
/// Row 0 is the bottom row; pieces in a column always occupy a contiguous
/// run of rows starting at 0. Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Option<Colour>>,
}

impl Board {
    /// Create a new empty board of the standard 6x7 size
    pub fn new() -> Self {
        Board {
            rows: ROWS,
            columns: COLS,
            cells: vec![None; ROWS * COLS],
        }
    }

    /// Create a new empty board with custom dimensions.
    ///
    /// Four-in-a-row is only reachable when both dimensions are at least 4,
    /// but smaller boards are accepted.
    pub fn with_size(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::InvalidDimensions { rows, columns });
        }
        Ok(Board {
            rows,
            columns,
            cells: vec![None; rows * columns],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Lowest empty row in `column`, or `None` if the column is full.
    pub fn next_free_row(&self, column: usize) -> Result<Option<usize>, BoardError> {
        self.check_column(column)?;
        Ok(self.free_row(column))
    }

    /// Get the colour at a specific position
    pub fn colour_at(&self, row: usize, column: usize) -> Result<Option<Colour>, BoardError> {
        self.check_row(row)?;
        self.check_column(column)?;
        Ok(self.cell(row, column))
    }

    /// Drop a piece in a column. Returns the row where it landed, or
    /// `None` (leaving the board unchanged) if the column is full.
    pub fn drop_piece(
        &mut self,
        column: usize,
        colour: Colour,
    ) -> Result<Option<usize>, BoardError> {
        self.check_column(column)?;
        Ok(self.drop_unchecked(column, colour))
    }

    /// Place a piece, reporting whether it fit.
    pub fn place(&mut self, colour: Colour, column: usize) -> Result<bool, BoardError> {
        self.drop_piece(column, colour).map(|row| row.is_some())
    }

    /// Whether the piece at `(row, column)` is part of a four-in-a-row.
    /// An empty cell never is.
    pub fn connects_four(&self, row: usize, column: usize) -> Result<bool, BoardError> {
        self.check_row(row)?;
        self.check_column(column)?;
        Ok(self.line_through(row, column))
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= self.columns || self.free_row(column).is_none()
    }

    /// Columns that can still take a piece, in ascending order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| self.free_row(column).is_some())
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|column| self.is_column_full(column))
    }

    /// Remove every piece
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Independent copy for simulating hypothetical moves.
    pub fn snapshot(&self) -> Board {
        self.clone()
    }

    /// Snapshot with `colour` dropped into `column`, plus the landing row.
    /// `None` if the column is full. `column` must be in range.
    pub(crate) fn with_move(&self, colour: Colour, column: usize) -> Option<(Board, usize)> {
        let mut next = self.snapshot();
        let row = next.drop_unchecked(column, colour)?;
        Some((next, row))
    }

    pub(crate) fn free_row(&self, column: usize) -> Option<usize> {
        (0..self.rows).find(|&row| self.cell(row, column).is_none())
    }

    pub(crate) fn drop_unchecked(&mut self, column: usize, colour: Colour) -> Option<usize> {
        let row = self.free_row(column)?;
        let idx = self.index(row, column);
        self.cells[idx] = Some(colour);
        Some(row)
    }

    /// Walk three steps out from the cell along every direction, and again
    /// from the cell one step behind it. Together the two rays in opposite
    /// directions cover all four positions the cell can hold in a line.
    pub(crate) fn line_through(&self, row: usize, column: usize) -> bool {
        let Some(colour) = self.cell(row, column) else {
            return false;
        };
        let (row, column) = (row as isize, column as isize);

        DIRECTIONS.iter().any(|&(dr, dc)| {
            self.ray_matches(row, column, dr, dc, colour)
                || self.ray_matches(row - dr, column - dc, dr, dc, colour)
        })
    }

    fn ray_matches(&self, row: isize, column: isize, dr: isize, dc: isize, colour: Colour) -> bool {
        (0..LINE).all(|step| self.cell_signed(row + dr * step, column + dc * step) == Some(colour))
    }

    fn cell_signed(&self, row: isize, column: isize) -> Option<Colour> {
        if row < 0 || column < 0 {
            return None;
        }
        let (row, column) = (row as usize, column as usize);
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cell(row, column)
    }

    fn cell(&self, row: usize, column: usize) -> Option<Colour> {
        self.cells[self.index(row, column)]
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    fn check_column(&self, column: usize) -> Result<(), BoardError> {
        if column >= self.columns {
            return Err(BoardError::InvalidColumn {
                column,
                columns: self.columns,
            });
        }
        Ok(())
    }

    fn check_row(&self, row: usize) -> Result<(), BoardError> {
        if row >= self.rows {
            return Err(BoardError::InvalidRow {
                row,
                rows: self.rows,
            });
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..self.rows).rev() {
            for column in 0..self.columns {
                let symbol = self.cell(row, column).map_or('.', Colour::symbol);
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        for column in 0..self.columns {
            write!(f, " {}", (column + 1) % 10)?;
        }
        writeln!(f)
    }
}
