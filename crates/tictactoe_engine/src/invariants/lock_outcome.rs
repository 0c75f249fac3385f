//! Lock invariant: the session is locked exactly when the game is decided.

use super::Invariant;
use crate::GameSession;

/// Invariant: `locked` is set iff a line is complete or the board is full.
pub struct LockMatchesOutcomeInvariant;

impl Invariant<GameSession> for LockMatchesOutcomeInvariant {
    fn holds(session: &GameSession) -> bool {
        session.is_locked() == session.status().is_terminal()
    }

    fn description() -> &'static str {
        "Session is locked exactly when the game is won or drawn"
    }
}
