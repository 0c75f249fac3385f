//! First-class invariants for tic-tac-toe sessions.
//!
//! Invariants are logical properties that must hold after every accepted move.
//! The engine checks them in debug builds; tests check them directly.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

pub mod alternating_marks;
pub mod lock_outcome;
pub mod mark_count;

pub use alternating_marks::MarksAlternateInvariant;
pub use lock_outcome::LockMatchesOutcomeInvariant;
pub use mark_count::MarkCountInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    MarkCountInvariant,
    MarksAlternateInvariant,
    LockMatchesOutcomeInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CellState, GameEngine, GameSession, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(SessionInvariants::check_all(&GameSession::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = GameEngine::new();
        for pos in [Position::TOP_LEFT, Position::CENTER, Position::TOP_RIGHT] {
            engine.apply_move(pos).expect("legal move");
        }
        assert!(SessionInvariants::check_all(engine.session()).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut session = GameSession::new();
        // Two O marks without any turns played
        session.board.set(Position::TOP_LEFT, CellState::MarkO);
        session.board.set(Position::CENTER, CellState::MarkO);

        let violations = SessionInvariants::check_all(&session)
            .expect_err("corrupted session must be rejected");
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MarkCountInvariant, LockMatchesOutcomeInvariant);
        assert!(TwoInvariants::check_all(&GameSession::new()).is_ok());
    }
}
