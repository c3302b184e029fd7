//! Board cursor and D-pad movement.

use derive_more::Display;
use tracing::instrument;

/// Direction of a single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Direction {
    /// One column left.
    Left,
    /// One column right.
    Right,
    /// One row up.
    Up,
    /// One row down.
    Down,
}

/// Selected square, always inside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[display("({row}, {col})")]
pub struct Cursor {
    row: u8,
    col: u8,
}

impl Cursor {
    /// Creates a cursor, wrapping coordinates into the grid.
    pub const fn new(row: u8, col: u8) -> Self {
        Self {
            row: row % 3,
            col: col % 3,
        }
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// True when this square lies on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.col
    }

    /// True when this square lies on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.col == 2
    }

    /// Returns the cursor moved one step, wrapping at the edges.
    #[instrument]
    pub fn moved(self, direction: Direction) -> Self {
        match direction {
            Direction::Left => Self::new(self.row, (self.col + 2) % 3),
            Direction::Right => Self::new(self.row, self.col + 1),
            Direction::Up => Self::new((self.row + 2) % 3, self.col),
            Direction::Down => Self::new(self.row + 1, self.col),
        }
    }

    /// All nine squares in row-major order.
    pub fn all() -> impl Iterator<Item = Cursor> {
        (0..3).flat_map(|row| (0..3).map(move |col| Cursor { row, col }))
    }
}
