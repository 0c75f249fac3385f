//! Mutable state of a single game.

use super::rules;
use super::types::{Board, Player};
use serde::{Deserialize, Serialize};

/// Where a game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{player} wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// One game from reset to terminal outcome.
///
/// Owned by [`GameEngine`](crate::GameEngine), which is the only writer.
/// Callers get a read-only view for rendering or serialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) turn: u32,
    pub(crate) locked: bool,
}

impl GameSession {
    /// A fresh game: empty board, Player 1 to move, turn 0, unlocked.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Player1,
            turn: 0,
            locked: false,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or the player who made the final move once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Number of accepted moves.
    pub fn turn_count(&self) -> u32 {
        self.turn
    }

    /// Returns true once the game has been decided.
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Derives the status from the board.
    pub fn status(&self) -> GameStatus {
        match rules::winner(&self.board) {
            Some(player) => GameStatus::Won(player),
            None if rules::is_full(&self.board) => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
