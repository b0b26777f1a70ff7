//! Fullness detection for tic-tac-toe.

use crate::types::{Board, Cell};

/// Checks if the board is full (no empty cell left).
///
/// A full board is only a draw when the last move did not complete a line.
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|cell| *cell != Cell::Empty)
}
