//! Error types for the tic-tac-toe engine.
//!
//! Every failure here is an expected user-input condition. None of them
//! leaves the game in a modified state.

use super::position::Position;
use derive_more::{Display, Error, From};

/// A move request the engine refused.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The requested cell already holds a mark.
    #[display("This tile is already taken, choose another")]
    CellOccupied {
        /// The cell that was requested.
        position: Position,
    },

    /// The game has been decided; only a new game is accepted.
    #[display("Game over.  Hit play again to start a new game.")]
    GameLocked,

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", description)]
    InvariantViolation {
        /// Descriptions of the violated invariants.
        description: String,
    },
}

/// Raw coordinates that do not name a cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum PositionError {
    /// Row or column outside `0..3`.
    #[display("Position ({}, {}) is off the board; rows and columns run 0-2", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// Text that could not be read as `row col`.
    #[display("Could not read a position from {:?}; expected \"row col\"", input)]
    Parse {
        /// The rejected text.
        input: String,
    },
}

/// Any error from [`GameEngine::apply_move_at`](crate::GameEngine::apply_move_at).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    /// The coordinates were invalid.
    #[display("{}", _0)]
    Position(PositionError),
    /// The move was refused.
    #[display("{}", _0)]
    Move(MoveError),
}
