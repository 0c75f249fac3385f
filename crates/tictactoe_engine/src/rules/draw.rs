//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::Board;
use tracing::instrument;

/// Checks if the board is full (all cells claimed).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
