//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). The engine calls
//! [`completes_line`] after each placement; [`winner`] scans every line
//! and is kept for whole-board checks.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{completes_line, winner};
