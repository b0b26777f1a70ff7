//! Core domain types: signs, cells, coordinates and the board.

use crate::error::{MatchError, MoveRejection};
use crate::rules;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the board.
pub const BOARD_SIZE: usize = 3;

/// The mark a player places on a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Sign {
    /// Cross, shown as `X`.
    #[serde(rename = "X", alias = "x")]
    #[strum(to_string = "X")]
    Cross,
    /// Zero, shown as `0`.
    #[serde(rename = "0", alias = "O", alias = "o")]
    #[strum(to_string = "0", serialize = "O")]
    Zero,
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked with a sign.
    Marked(Sign),
}

impl Cell {
    /// Returns the sign in this cell, if any.
    pub fn sign(self) -> Option<Sign> {
        match self {
            Cell::Empty => None,
            Cell::Marked(sign) => Some(sign),
        }
    }
}

/// A `(row, col)` address on the board.
///
/// Values outside `0..3` can be built (they arrive from user input) but are
/// refused by [`Board::place`] and the match engine.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Coordinates {
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl Coordinates {
    /// All nine cells in row-major order.
    pub const ALL: [Coordinates; 9] = [
        Coordinates::new(0, 0),
        Coordinates::new(0, 1),
        Coordinates::new(0, 2),
        Coordinates::new(1, 0),
        Coordinates::new(1, 1),
        Coordinates::new(1, 2),
        Coordinates::new(2, 0),
        Coordinates::new(2, 1),
        Coordinates::new(2, 2),
    ];

    /// Creates coordinates without range checking.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if both components are on the grid.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Creates coordinates from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major index (0-8), or `None` when off the board.
    pub fn index(self) -> Option<usize> {
        self.in_bounds().then_some(self.row * BOARD_SIZE + self.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    }

    /// Returns the cell at the given coordinates, `None` when off the board.
    pub fn get(&self, at: Coordinates) -> Option<Cell> {
        self.cells.get(at.row).and_then(|row| row.get(at.col)).copied()
    }

    /// True if the cell exists and carries no mark.
    pub fn is_empty(&self, at: Coordinates) -> bool {
        matches!(self.get(at), Some(Cell::Empty))
    }

    /// Marks a cell with `sign`.
    ///
    /// Only the bounds are checked here. Overwriting an existing mark is
    /// prevented one level up, by the match engine.
    #[instrument(skip(self))]
    pub fn place(&mut self, sign: Sign, at: Coordinates) -> Result<(), MatchError> {
        if !at.in_bounds() {
            return Err(MoveRejection::OutOfBounds(at).into());
        }
        self.cells[at.row][at.col] = Cell::Marked(sign);
        Ok(())
    }

    /// True if any of the eight lines is fully marked with `sign`.
    pub fn has_line(&self, sign: Sign) -> bool {
        rules::has_line(self, sign)
    }

    /// True if no empty cell remains.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinates> {
        Coordinates::ALL
            .iter()
            .copied()
            .filter(|&at| self.is_empty(at))
            .collect()
    }

    /// Number of marked cells.
    pub fn marked(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their keypad number (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let symbol = match cell.sign() {
                    None => (r * BOARD_SIZE + c + 1).to_string(),
                    Some(sign) => sign.to_string(),
                };
                result.push_str(&symbol);
                if c < BOARD_SIZE - 1 {
                    result.push('|');
                }
            }
            if r < BOARD_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sign_parsing() {
        assert_eq!(Sign::from_str("X").unwrap(), Sign::Cross);
        assert_eq!(Sign::from_str("x").unwrap(), Sign::Cross);
        assert_eq!(Sign::from_str("0").unwrap(), Sign::Zero);
        assert_eq!(Sign::from_str("o").unwrap(), Sign::Zero);
        assert!(Sign::from_str("#").is_err());
        assert_eq!(Sign::Zero.to_string(), "0");
    }

    #[test]
    fn test_sign_serde_names() {
        assert_eq!(serde_json::to_string(&Sign::Cross).unwrap(), "\"X\"");
        let zero: Sign = serde_json::from_str("\"O\"").unwrap();
        assert_eq!(zero, Sign::Zero);
    }

    #[test]
    fn test_coordinates_index() {
        assert_eq!(Coordinates::new(0, 0).index(), Some(0));
        assert_eq!(Coordinates::new(1, 1).index(), Some(4));
        assert_eq!(Coordinates::new(2, 2).index(), Some(8));
        assert_eq!(Coordinates::new(3, 0).index(), None);
        assert_eq!(Coordinates::from_index(5), Some(Coordinates::new(1, 2)));
        assert_eq!(Coordinates::from_index(9), None);
    }

    #[test]
    fn test_place_and_reset() {
        let mut board = Board::new();
        board.place(Sign::Cross, Coordinates::new(1, 1)).unwrap();
        assert_eq!(board.get(Coordinates::new(1, 1)), Some(Cell::Marked(Sign::Cross)));
        assert_eq!(board.marked(), 1);

        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut board = Board::new();
        let err = board.place(Sign::Zero, Coordinates::new(0, 3)).unwrap_err();
        assert!(err.is_invalid_move());
        assert_eq!(board.marked(), 0);
    }

    #[test]
    fn test_place_does_not_guard_occupancy() {
        let mut board = Board::new();
        board.place(Sign::Cross, Coordinates::new(0, 0)).unwrap();
        board.place(Sign::Zero, Coordinates::new(0, 0)).unwrap();
        assert_eq!(board.get(Coordinates::new(0, 0)), Some(Cell::Marked(Sign::Zero)));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new();
        assert_eq!(board.empty_cells(), Coordinates::ALL.to_vec());

        board.place(Sign::Cross, Coordinates::new(0, 1)).unwrap();
        board.place(Sign::Zero, Coordinates::new(2, 0)).unwrap();
        let empty = board.empty_cells();
        assert_eq!(empty.len(), 7);
        assert_eq!(empty[0], Coordinates::new(0, 0));
        assert_eq!(empty[1], Coordinates::new(0, 2));
        assert!(!empty.contains(&Coordinates::new(2, 0)));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(Sign::Cross, Coordinates::new(0, 0)).unwrap();
        board.place(Sign::Zero, Coordinates::new(1, 1)).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|0|6\n-+-+-\n7|8|9");
    }
}
