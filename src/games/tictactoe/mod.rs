//! Tic-tac-toe board engine and rules.

mod cursor;
mod engine;
pub mod rules;
mod types;

pub use cursor::{Cursor, Direction};
pub use engine::BoardEngine;
pub use types::{Board, Outcome, Player, Square};
