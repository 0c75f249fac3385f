//! Mark count invariant: one mark per accepted move.

use super::Invariant;
use crate::GameSession;

/// Invariant: the number of claimed cells equals the turn counter.
pub struct MarkCountInvariant;

impl Invariant<GameSession> for MarkCountInvariant {
    fn holds(session: &GameSession) -> bool {
        session.board().marks() == session.turn_count() as usize
    }

    fn description() -> &'static str {
        "Claimed cells equal turns played"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellState, GameEngine, Position};

    #[test]
    fn test_holds_through_play() {
        let mut engine = GameEngine::new();
        assert!(MarkCountInvariant::holds(engine.session()));
        engine.apply_move(Position::CENTER).expect("legal move");
        assert!(MarkCountInvariant::holds(engine.session()));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut session = GameSession::new();
        session.board.set(Position::CENTER, CellState::MarkX);
        assert!(!MarkCountInvariant::holds(&session));
    }
}
