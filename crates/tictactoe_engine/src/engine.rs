//! Turn sequencing for tic-tac-toe.
//!
//! [`GameEngine`] owns a single [`GameSession`] and is the only thing that
//! mutates it. Presentation code forwards coordinates into
//! [`GameEngine::apply_move`] and re-renders from the query accessors after
//! every call.

use super::error::{EngineError, MoveError};
#[cfg(debug_assertions)]
use super::invariants::{InvariantSet, SessionInvariants};
use super::position::Position;
use super::rules;
use super::session::{GameSession, GameStatus};
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Outcome of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// Game goes on; `next_player` moves next.
    Continue {
        /// Player to move next.
        next_player: Player,
    },
    /// The mover completed a line.
    Won {
        /// Player who completed the line.
        winner: Player,
    },
    /// The move filled the board without completing a line.
    Draw,
}

impl MoveResult {
    /// Returns true if no further moves will be accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MoveResult::Continue { .. })
    }
}

impl std::fmt::Display for MoveResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveResult::Continue { next_player } => write!(f, "{next_player} to move"),
            MoveResult::Won { winner } => write!(f, "{winner} has won!"),
            MoveResult::Draw => write!(f, "Draw"),
        }
    }
}

/// Tic-tac-toe rules engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    session: GameSession,
}

impl GameEngine {
    /// Creates an engine with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    /// Places the current player's mark at `position`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameLocked`] if the game is already won or drawn.
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark.
    ///
    /// The session is untouched on error.
    #[instrument(skip(self), fields(player = %self.session.current_player, turn = self.session.turn))]
    pub fn apply_move(&mut self, position: Position) -> Result<MoveResult, MoveError> {
        if self.session.locked {
            warn!(%position, "Move rejected: game is over");
            return Err(MoveError::GameLocked);
        }

        if !self.session.board.is_empty(position) {
            warn!(%position, "Move rejected: cell occupied");
            return Err(MoveError::CellOccupied { position });
        }

        let mover = self.session.current_player;
        self.session.board.set(position, mover.mark());
        self.session.turn += 1;
        debug!(%position, %mover, turn = self.session.turn, "Mark placed");

        let result = if rules::has_won(&self.session.board, mover) {
            self.session.locked = true;
            info!(winner = %mover, turns = self.session.turn, "Game won");
            MoveResult::Won { winner: mover }
        } else if rules::is_full(&self.session.board) {
            self.session.locked = true;
            info!(turns = self.session.turn, "Game drawn");
            MoveResult::Draw
        } else {
            self.session.current_player = mover.opponent();
            MoveResult::Continue {
                next_player: self.session.current_player,
            }
        };

        #[cfg(debug_assertions)]
        SessionInvariants::check_all(&self.session).map_err(|violations| {
            let description = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation { description }
        })?;

        Ok(result)
    }

    /// Validates raw coordinates, then applies the move.
    ///
    /// # Errors
    ///
    /// [`EngineError::Position`] for coordinates off the board, otherwise
    /// whatever [`apply_move`](Self::apply_move) returns.
    #[instrument(skip(self))]
    pub fn apply_move_at(&mut self, row: usize, col: usize) -> Result<MoveResult, EngineError> {
        let position = Position::new(row, col)?;
        Ok(self.apply_move(position)?)
    }

    /// Discards the current game and starts a fresh one.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.session = GameSession::new();
        info!("New game started");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.session.board
    }

    /// Player to move, or the last mover once the game is over.
    pub fn current_player(&self) -> Player {
        self.session.current_player
    }

    /// Number of accepted moves in this game.
    pub fn turn_count(&self) -> u32 {
        self.session.turn
    }

    /// Returns true once the game is won or drawn.
    pub fn is_locked(&self) -> bool {
        self.session.locked
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    /// Read-only view of the whole session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// One-line summary suitable for a status bar.
    pub fn status_line(&self) -> String {
        match self.status() {
            GameStatus::InProgress => format!(
                "{}'s turn; turn # {}",
                self.session.current_player, self.session.turn
            ),
            GameStatus::Won(winner) => format!("{winner} has won!"),
            GameStatus::Draw => {
                "There are no more turns available.  Please start a new game!".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellState;

    fn play(engine: &mut GameEngine, moves: &[Position]) -> MoveResult {
        let mut last = None;
        for pos in moves {
            last = Some(engine.apply_move(*pos).expect("legal move"));
        }
        last.expect("at least one move")
    }

    #[test]
    fn test_first_move_marks_x() {
        let mut engine = GameEngine::new();
        let result = engine.apply_move(Position::CENTER).expect("legal move");
        assert_eq!(
            result,
            MoveResult::Continue {
                next_player: Player::Player2
            }
        );
        assert_eq!(engine.board().get(Position::CENTER), CellState::MarkX);
        assert_eq!(engine.turn_count(), 1);
    }

    #[test]
    fn test_occupied_cell_leaves_state_alone() {
        let mut engine = GameEngine::new();
        engine.apply_move(Position::TOP_LEFT).expect("legal move");
        let before = engine.clone();

        let err = engine.apply_move(Position::TOP_LEFT).unwrap_err();
        assert_eq!(
            err,
            MoveError::CellOccupied {
                position: Position::TOP_LEFT
            }
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_lock_checked_before_occupancy() {
        let mut engine = GameEngine::new();
        play(
            &mut engine,
            &[
                Position::TOP_LEFT,
                Position::MIDDLE_LEFT,
                Position::TOP_CENTER,
                Position::CENTER,
                Position::TOP_RIGHT,
            ],
        );
        assert_eq!(
            engine.apply_move(Position::TOP_LEFT),
            Err(MoveError::GameLocked)
        );
        assert_eq!(
            engine.apply_move(Position::BOTTOM_RIGHT),
            Err(MoveError::GameLocked)
        );
    }

    #[test]
    fn test_win_keeps_mover_as_current_player() {
        let mut engine = GameEngine::new();
        let result = play(
            &mut engine,
            &[
                Position::TOP_RIGHT,
                Position::TOP_LEFT,
                Position::BOTTOM_RIGHT,
                Position::CENTER,
                Position::BOTTOM_LEFT,
                Position::BOTTOM_CENTER,
                Position::MIDDLE_LEFT,
                Position::TOP_CENTER,
            ],
        );
        assert_eq!(
            result,
            MoveResult::Won {
                winner: Player::Player2
            }
        );
        assert_eq!(engine.current_player(), Player::Player2);
        assert_eq!(engine.status(), GameStatus::Won(Player::Player2));
    }

    #[test]
    fn test_apply_move_at_rejects_off_board() {
        let mut engine = GameEngine::new();
        let err = engine.apply_move_at(3, 1).unwrap_err();
        assert!(matches!(err, EngineError::Position(_)));
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_apply_move_at_forwards_move_errors() {
        let mut engine = GameEngine::new();
        engine.apply_move_at(2, 2).expect("legal move");
        assert_eq!(
            engine.apply_move_at(2, 2),
            Err(EngineError::Move(MoveError::CellOccupied {
                position: Position::BOTTOM_RIGHT
            }))
        );
    }

    #[test]
    fn test_status_line_in_progress() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.status_line(), "Player 1's turn; turn # 0");
        engine.apply_move(Position::CENTER).expect("legal move");
        assert_eq!(engine.status_line(), "Player 2's turn; turn # 1");
    }

    #[test]
    fn test_status_line_won() {
        let mut engine = GameEngine::new();
        play(
            &mut engine,
            &[
                Position::TOP_LEFT,
                Position::MIDDLE_LEFT,
                Position::CENTER,
                Position::MIDDLE_RIGHT,
                Position::BOTTOM_RIGHT,
            ],
        );
        assert_eq!(engine.status_line(), "Player 1 has won!");
    }

    #[test]
    fn test_move_result_display() {
        assert_eq!(
            MoveResult::Continue {
                next_player: Player::Player2
            }
            .to_string(),
            "Player 2 to move"
        );
        assert_eq!(
            MoveResult::Won {
                winner: Player::Player1
            }
            .to_string(),
            "Player 1 has won!"
        );
        assert!(MoveResult::Draw.is_terminal());
    }
}
