//! Alternating marks invariant: X, O, X, O, ...

use super::Invariant;
use crate::{CellState, GameSession, Player};

/// Invariant: players alternate, starting with Player 1.
///
/// X leads O by zero or one mark. While the game is open, the player to
/// move is the one whose turn that count implies. Once locked, the current
/// player is whoever made the last move.
pub struct MarksAlternateInvariant;

impl Invariant<GameSession> for MarksAlternateInvariant {
    fn holds(session: &GameSession) -> bool {
        let x = session.board().count(CellState::MarkX);
        let o = session.board().count(CellState::MarkO);

        if x != o && x != o + 1 {
            return false;
        }

        let x_moved_last = x > o;
        let expected = if session.is_locked() == x_moved_last {
            Player::Player1
        } else {
            Player::Player2
        };

        session.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
