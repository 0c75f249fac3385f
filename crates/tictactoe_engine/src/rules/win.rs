//! Win detection logic for tic-tac-toe.

use super::LINES;
use crate::{Board, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks whether `player` holds three in a row.
///
/// Scans every column, row and diagonal; any single complete line is enough.
#[instrument(skip(board))]
pub fn has_won(board: &Board, player: Player) -> bool {
    let mark = player.mark();
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == mark))
}

/// Returns the owner of a completed line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|player| has_won(board, *player))
}
