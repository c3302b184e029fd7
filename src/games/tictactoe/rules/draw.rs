//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::super::{Cursor, Player};
    use super::super::win::winner;
    use super::*;

    fn is_tie(board: &Board) -> bool {
        is_full(board) && winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Cursor::new(1, 1), Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for at in Cursor::all() {
            board.set(at, Square::Occupied(Player::X));
        }
        assert!(is_full(&board));
    }

    #[test]
    fn test_tie_detection() {
        // X O X / O X X / O X O
        let layout = [
            [Player::X, Player::O, Player::X],
            [Player::O, Player::X, Player::X],
            [Player::O, Player::X, Player::O],
        ];
        let mut board = Board::new();
        for at in Cursor::all() {
            board.set(at, Square::Occupied(layout[at.row()][at.col()]));
        }

        assert!(is_tie(&board));
    }
}
