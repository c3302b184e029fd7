//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cursor, Player, Square};
use tracing::instrument;

const MAIN_DIAGONAL: [Cursor; 3] = [
    Cursor::new(0, 0),
    Cursor::new(1, 1),
    Cursor::new(2, 2),
];
const ANTI_DIAGONAL: [Cursor; 3] = [
    Cursor::new(0, 2),
    Cursor::new(1, 1),
    Cursor::new(2, 0),
];

fn line_owned_by(board: &Board, line: [Cursor; 3], player: Player) -> bool {
    line.iter()
        .all(|&at| board.get(at) == Square::Occupied(player))
}

/// Checks whether the mark just placed at `last` completes a line.
///
/// Only the row and column through `last` are inspected, plus each
/// diagonal `last` lies on. A single placement cannot complete any other
/// line.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, last: Cursor, player: Player) -> bool {
    let (row, col) = (last.row() as u8, last.col() as u8);
    let column = [Cursor::new(0, col), Cursor::new(1, col), Cursor::new(2, col)];
    let across = [Cursor::new(row, 0), Cursor::new(row, 1), Cursor::new(row, 2)];

    line_owned_by(board, column, player)
        || line_owned_by(board, across, player)
        || (last.on_main_diagonal() && line_owned_by(board, MAIN_DIAGONAL, player))
        || (last.on_anti_diagonal() && line_owned_by(board, ANTI_DIAGONAL, player))
}

/// Checks if there is a winner anywhere on the board.
///
/// Scans all eight lines. Returns `Some(player)` if the player has three
/// in a row, `None` otherwise.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    let rows = (0..3u8).map(|r| [Cursor::new(r, 0), Cursor::new(r, 1), Cursor::new(r, 2)]);
    let cols = (0..3u8).map(|c| [Cursor::new(0, c), Cursor::new(1, c), Cursor::new(2, c)]);

    rows.chain(cols)
        .chain([MAIN_DIAGONAL, ANTI_DIAGONAL])
        .find_map(|[a, b, c]| {
            let sq = board.get(a);
            match sq {
                Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                    Some(player)
                }
                _ => None,
            }
        })
}
