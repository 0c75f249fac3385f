//! Tic-tac-toe rules engine.
//!
//! A two-player, 3x3 game-state machine: board representation, move
//! validation, win and draw detection, and turn sequencing. There is no I/O;
//! a presentation layer drives the engine and renders from its accessors.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, MoveResult, Player, Position};
//!
//! let mut engine = GameEngine::new();
//! let result = engine.apply_move(Position::CENTER).unwrap();
//! assert_eq!(result, MoveResult::Continue { next_player: Player::Player2 });
//! assert_eq!(engine.status_line(), "Player 2's turn; turn # 1");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;

pub use engine::{GameEngine, MoveResult};
pub use error::{EngineError, MoveError, PositionError};
pub use position::Position;
pub use session::{GameSession, GameStatus};
pub use types::{Board, CELLS, CellState, Player, SIDE};
