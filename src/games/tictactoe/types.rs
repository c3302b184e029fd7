//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::cursor::Cursor;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character used to print this player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used to print this square; empty squares print as a space.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

/// 3x3 tic-tac-toe board, indexed by row then column.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    rows: [[Square; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square under the cursor.
    pub fn get(&self, at: Cursor) -> Square {
        self.rows[at.row()][at.col()]
    }

    /// Sets the square under the cursor.
    pub fn set(&mut self, at: Cursor, square: Square) {
        self.rows[at.row()][at.col()] = square;
    }

    /// Checks if the square under the cursor is empty.
    pub fn is_empty(&self, at: Cursor) -> bool {
        self.get(at) == Square::Empty
    }

    /// Returns one row of the board.
    pub fn row(&self, row: usize) -> &[Square; 3] {
        &self.rows[row]
    }

    /// Returns all rows.
    pub fn rows(&self) -> &[[Square; 3]; 3] {
        &self.rows
    }

    /// Counts squares holding the given player's mark.
    #[instrument(skip(self))]
    pub fn count(&self, player: Player) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }
}

/// Result of the game so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended with three in a row.
    Won(Player),
    /// Board filled without a line.
    Tie,
}

impl Outcome {
    /// True once the game has been won or tied.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}
