//! Board engine: the tic-tac-toe state machine driven by cursor input.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use super::cursor::{Cursor, Direction};
use super::rules;
use super::types::{Board, Outcome, Player, Square};

/// Number of placements that fill the board.
const FULL_BOARD: u8 = 9;

/// Tic-tac-toe engine owning the board, turn, outcome and cursor.
///
/// Illegal actions (placing on an occupied square, placing after the game
/// has ended, resetting a game in progress) are ignored rather than
/// reported; the mutating methods return whether anything changed.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BoardEngine {
    board: Board,
    turn: Player,
    turns: u8,
    outcome: Outcome,
    cursor: Cursor,
}

impl BoardEngine {
    /// Creates an engine with an empty board and the cursor top-left.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::X,
            turns: 0,
            outcome: Outcome::InProgress,
            cursor: Cursor::default(),
        }
    }

    /// Clears the board and hands the first move to X.
    ///
    /// The cursor keeps its position.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Player::X;
        self.turns = 0;
        self.outcome = Outcome::InProgress;
        debug!(cursor = %self.cursor, "Board reset");
    }

    /// Moves the cursor one square, wrapping at the edges.
    #[instrument(skip(self))]
    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = self.cursor.moved(direction);
        debug!(cursor = %self.cursor, "Cursor moved");
    }

    /// Places the current player's mark on the square under the cursor.
    pub fn place_at_cursor(&mut self) -> bool {
        self.place_at(self.cursor)
    }

    /// Places the current player's mark at `at`.
    ///
    /// Returns `false` without touching any state when the game is over or
    /// the square is taken.
    #[instrument(skip(self))]
    pub fn place_at(&mut self, at: Cursor) -> bool {
        if self.outcome.is_terminal() || !self.board.is_empty(at) {
            debug!(outcome = ?self.outcome, "Placement ignored");
            return false;
        }

        let player = self.turn;
        self.board.set(at, Square::Occupied(player));
        self.turns += 1;
        debug!(player = %player, at = %at, turns = self.turns, "Mark placed");

        if rules::completes_line(&self.board, at, player) {
            self.outcome = Outcome::Won(player);
            info!(winner = %player, "Game won");
        } else if self.turns == FULL_BOARD {
            debug_assert!(rules::is_full(&self.board));
            self.outcome = Outcome::Tie;
            info!("Game tied");
        } else {
            self.turn = player.opponent();
        }
        true
    }

    /// Starts a new game once the current one has ended.
    ///
    /// Returns `false` while the game is still in progress.
    #[instrument(skip(self))]
    pub fn reset_request(&mut self) -> bool {
        if !self.outcome.is_terminal() {
            return false;
        }
        self.reset();
        true
    }
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(engine: &mut BoardEngine, moves: &[(u8, u8)]) {
        for &(r, c) in moves {
            assert!(engine.place_at(Cursor::new(r, c)), "move ({r}, {c}) rejected");
        }
    }

    #[test]
    fn test_first_move_is_x() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &[(1, 1)]);
        assert_eq!(engine.board().get(Cursor::new(1, 1)), Square::Occupied(Player::X));
        assert_eq!(*engine.turn(), Player::O);
        assert_eq!(*engine.turns(), 1);
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &[(0, 0)]);
        let before = engine.clone();
        assert!(!engine.place_at(Cursor::new(0, 0)));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_row_win_stops_play() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        assert_eq!(*engine.outcome(), Outcome::Won(Player::X));
        // Winner keeps the turn.
        assert_eq!(*engine.turn(), Player::X);

        let before = engine.clone();
        assert!(!engine.place_at(Cursor::new(2, 0)));
        assert_eq!(engine, before);
    }

    #[test]
    fn test_ninth_move_ties() {
        let mut engine = BoardEngine::new();
        // X O X / X O O / O X X
        play(
            &mut engine,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );
        assert_eq!(*engine.outcome(), Outcome::Tie);
        assert_eq!(*engine.turns(), 9);
    }

    #[test]
    fn test_reset_request_ignored_in_progress() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &[(0, 0)]);
        let before = engine.clone();
        assert!(!engine.reset_request());
        assert_eq!(engine, before);
    }

    #[test]
    fn test_reset_request_keeps_cursor() {
        let mut engine = BoardEngine::new();
        play(&mut engine, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
        engine.move_cursor(Direction::Down);
        engine.move_cursor(Direction::Right);

        assert!(engine.reset_request());
        assert_eq!(*engine.outcome(), Outcome::InProgress);
        assert_eq!(*engine.turn(), Player::X);
        assert_eq!(*engine.turns(), 0);
        assert_eq!(*engine.board(), Board::new());
        assert_eq!(*engine.cursor(), Cursor::new(1, 1));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut engine = BoardEngine::new();
        engine.reset();
        let once = engine.clone();
        engine.reset();
        assert_eq!(engine, once);
    }
}
