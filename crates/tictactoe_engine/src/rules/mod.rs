//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so invariants and presentation code can reuse them.

pub mod draw;
pub mod win;

use crate::Position;

pub use draw::{is_draw, is_full};
pub use win::{has_won, winner};

/// The 8 lines that win the game: 3 columns, 3 rows, 2 diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Columns
    [Position::TOP_LEFT, Position::MIDDLE_LEFT, Position::BOTTOM_LEFT],
    [Position::TOP_CENTER, Position::CENTER, Position::BOTTOM_CENTER],
    [Position::TOP_RIGHT, Position::MIDDLE_RIGHT, Position::BOTTOM_RIGHT],
    // Rows
    [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
    [Position::MIDDLE_LEFT, Position::CENTER, Position::MIDDLE_RIGHT],
    [Position::BOTTOM_LEFT, Position::BOTTOM_CENTER, Position::BOTTOM_RIGHT],
    // Diagonals
    [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
    [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
];
