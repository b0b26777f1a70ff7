//! Line detection for tic-tac-toe.

use crate::types::{Board, Cell, Coordinates, Sign};
use tracing::instrument;

/// The eight winning triples: rows, columns, then diagonals.
pub const LINES: [[Coordinates; 3]; 8] = [
    // Rows
    [Coordinates::new(0, 0), Coordinates::new(0, 1), Coordinates::new(0, 2)],
    [Coordinates::new(1, 0), Coordinates::new(1, 1), Coordinates::new(1, 2)],
    [Coordinates::new(2, 0), Coordinates::new(2, 1), Coordinates::new(2, 2)],
    // Columns
    [Coordinates::new(0, 0), Coordinates::new(1, 0), Coordinates::new(2, 0)],
    [Coordinates::new(0, 1), Coordinates::new(1, 1), Coordinates::new(2, 1)],
    [Coordinates::new(0, 2), Coordinates::new(1, 2), Coordinates::new(2, 2)],
    // Diagonals
    [Coordinates::new(0, 0), Coordinates::new(1, 1), Coordinates::new(2, 2)],
    [Coordinates::new(2, 0), Coordinates::new(1, 1), Coordinates::new(0, 2)],
];

/// Returns the first line fully marked with `sign`, if any.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, sign: Sign) -> Option<[Coordinates; 3]> {
    let target = Some(Cell::Marked(sign));
    LINES
        .iter()
        .find(|line| line.iter().all(|&at| board.get(at) == target))
        .copied()
}

/// Checks whether `sign` has three in a row anywhere on the board.
pub fn has_line(board: &Board, sign: Sign) -> bool {
    winning_line(board, sign).is_some()
}
