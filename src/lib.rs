//! Tic-tac-toe game screen library.
//!
//! A single console game screen: a cursor-driven tic-tac-toe board plus a
//! hidden button sequence that pauses into an alignment-check screen.
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe [`BoardEngine`] and its rules
//! - **Input**: keypad [`Buttons`] and the [`SequenceMatcher`]
//! - **Screen**: the [`Screen`] lifecycle, the [`Host`]/[`Printer`]
//!   collaborators and [`TicTacToeScreen`]
//! - **Tui**: a crossterm/ratatui host for playing in a terminal
//!
//! # Example
//!
//! ```
//! use tictactoe_screen::{BoardEngine, Cursor, Outcome, Player};
//!
//! let mut engine = BoardEngine::new();
//! for (x, o) in [((0, 0), (1, 0)), ((0, 1), (1, 1))] {
//!     engine.place_at(Cursor::new(x.0, x.1));
//!     engine.place_at(Cursor::new(o.0, o.1));
//! }
//! engine.place_at(Cursor::new(0, 2));
//! assert_eq!(*engine.outcome(), Outcome::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod input;
mod screen;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{BoardLayout, ConfigError, PRINTING_COLUMNS, PRINTING_ROWS, ScreenConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardEngine, Cursor, Direction, Outcome, Player, Square, rules,
};

// Crate-level exports - Input
pub use input::{
    ALIGNMENT_CHECK_SEQUENCE, Button, Buttons, SequenceMatcher, UserInput, buttons_for_key,
    should_quit,
};

// Crate-level exports - Screens
pub use screen::{
    CameraEffect, DASHES, Host, Printer, Screen, ScreenTransition, TicTacToeScreen, format_row,
    print_board, status_text,
};
