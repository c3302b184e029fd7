//! Screens and the engine collaborators they drive.

mod screen;
mod text;
mod tictactoe;

pub use screen::{CameraEffect, Host, Printer, Screen, ScreenTransition};
pub use text::{DASHES, format_row, print_board, status_text};
pub use tictactoe::TicTacToeScreen;
