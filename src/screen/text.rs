//! Text rendering of the board and status line.

use tracing::instrument;

use super::screen::Printer;
use crate::config::BoardLayout;
use crate::games::tictactoe::{BoardEngine, Outcome, Player, Square};

/// Separator printed between board rows.
pub const DASHES: &str = " -----";

/// Formats one board row as `" a|b|c "`.
///
/// When `cursor_col` is set the characters either side of that cell become
/// `<` and `>`.
pub fn format_row(cells: &[Square; 3], cursor_col: Option<usize>) -> String {
    let mut row = [
        ' ',
        cells[0].symbol(),
        '|',
        cells[1].symbol(),
        '|',
        cells[2].symbol(),
        ' ',
    ];
    if let Some(col) = cursor_col.filter(|&c| c < 3) {
        row[col * 2] = '<';
        row[col * 2 + 2] = '>';
    }
    row.iter().collect()
}

/// Status line text for an outcome; blank while the game is running.
pub fn status_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won(Player::X) => "X won!",
        Outcome::Won(Player::O) => "O won!",
        Outcome::Tie => "Tie!",
        Outcome::InProgress => "      ",
    }
}

/// Clears the printer and prints the status line, rows and separators.
#[instrument(skip_all)]
pub fn print_board(printer: &mut dyn Printer, engine: &BoardEngine, layout: &BoardLayout) {
    let (x, font) = (*layout.x(), layout.font().as_str());
    printer.clear();
    printer.text(status_text(*engine.outcome()), x, *layout.status_y(), font);

    let cursor = engine.cursor();
    for (i, cells) in engine.board().rows().iter().enumerate() {
        let cursor_col = (cursor.row() == i).then(|| cursor.col());
        printer.text(&format_row(cells, cursor_col), x, layout.row_y(i), font);
        if i < 2 {
            printer.text(DASHES, x, layout.separator_y(i), font);
        }
    }
}
