//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Number of rows (and columns) on the board.
pub const SIDE: usize = 3;

/// Number of cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Occupancy of a single board cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// Unclaimed cell.
    #[default]
    Empty,
    /// Cell claimed by [`Player::Player1`].
    MarkX,
    /// Cell claimed by [`Player::Player2`].
    MarkO,
}

impl CellState {
    /// Glyph used when rendering the cell.
    pub fn glyph(self) -> char {
        match self {
            CellState::Empty => ' ',
            CellState::MarkX => 'X',
            CellState::MarkO => 'O',
        }
    }

    /// Returns true if nobody has claimed the cell.
    pub fn is_empty(self) -> bool {
        self == CellState::Empty
    }

    /// Returns the player whose mark this is, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            CellState::Empty => None,
            CellState::MarkX => Some(Player::Player1),
            CellState::MarkO => Some(Player::Player2),
        }
    }
}

/// One of the two players.
///
/// Names and marks come from a fixed table; players cannot be created at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Player {
    /// Moves first, plays X.
    Player1,
    /// Moves second, plays O.
    Player2,
}

struct PlayerInfo {
    name: &'static str,
    mark: CellState,
}

const PLAYERS: [PlayerInfo; 2] = [
    PlayerInfo {
        name: "Player 1",
        mark: CellState::MarkX,
    },
    PlayerInfo {
        name: "Player 2",
        mark: CellState::MarkO,
    },
];

impl Player {
    fn info(self) -> &'static PlayerInfo {
        &PLAYERS[self as usize]
    }

    /// Display name, e.g. `"Player 1"`.
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// The mark this player places on the board.
    pub fn mark(self) -> CellState {
        self.info().mark
    }

    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [CellState; CELLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from three rows of cells.
    ///
    /// Used by presentation code and tests to describe arbitrary layouts.
    /// A board built this way is detached from any game.
    pub fn from_rows(rows: [[CellState; SIDE]; SIDE]) -> Self {
        let mut board = Self::new();
        for pos in Position::ALL {
            board.set(pos, rows[pos.row()][pos.col()]);
        }
        board
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> CellState {
        self.cells[pos.index()]
    }

    /// Sets the cell at the given position.
    pub(crate) fn set(&mut self, pos: Position, cell: CellState) {
        self.cells[pos.index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns true when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| **cell == state).count()
    }

    /// Number of claimed cells.
    pub fn marks(&self) -> usize {
        CELLS - self.count(CellState::Empty)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellState; CELLS] {
        &self.cells
    }

    /// Snapshot of the board as a grid indexed by `[row][col]`.
    pub fn rows(&self) -> [[CellState; SIDE]; SIDE] {
        let mut rows = [[CellState::Empty; SIDE]; SIDE];
        for pos in Position::ALL {
            rows[pos.row()][pos.col()] = self.get(pos);
        }
        rows
    }

    /// Positions that can still be played.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.rows().into_iter().enumerate() {
            let [a, b, c] = row.map(CellState::glyph);
            write!(f, "{a}|{b}|{c}")?;
            if r + 1 < SIDE {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_player_table() {
        assert_eq!(Player::Player1.name(), "Player 1");
        assert_eq!(Player::Player1.mark(), CellState::MarkX);
        assert_eq!(Player::Player2.name(), "Player 2");
        assert_eq!(Player::Player2.mark(), CellState::MarkO);
    }

    #[test]
    fn test_mark_owner_round_trips() {
        for player in Player::iter() {
            assert_eq!(player.mark().owner(), Some(player));
            assert_eq!(player.opponent().opponent(), player);
        }
        assert_eq!(CellState::Empty.owner(), None);
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.marks(), 0);
        assert!(!board.is_full());
        assert_eq!(board.empty_positions().count(), CELLS);
    }

    #[test]
    fn test_rows_follow_row_col_indexing() {
        let mut board = Board::new();
        board.set(Position::MIDDLE_RIGHT, CellState::MarkO);
        let rows = board.rows();
        assert_eq!(rows[1][2], CellState::MarkO);
        assert_eq!(board.cells()[5], CellState::MarkO);
        assert_eq!(Board::from_rows(rows), board);
    }

    #[test]
    fn test_display() {
        use CellState::{Empty as E, MarkO as O, MarkX as X};
        let board = Board::from_rows([[X, O, E], [E, X, E], [E, E, O]]);
        assert_eq!(board.to_string(), "X|O| \n-+-+-\n |X| \n-+-+-\n | |O");
    }
}
