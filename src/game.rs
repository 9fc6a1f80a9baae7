//! Game controller: move history, undo and restart.
//!
//! A [`Game`] owns an append-only history of board snapshots. Entry 0 is
//! always the starting board; each accepted move pushes one more entry.
//! Undo pops, restart truncates. Invalid requests leave the state exactly
//! as it was and report `false`.

use std::fmt;

use tracing::{debug, info, instrument};

use crate::board::{Board, Tile, check_win, is_legal_move};

/// Progress of a game, as shown to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Still playing; carries the 1-based move number about to be made.
    InProgress(usize),
    /// Every square covered; carries the number of moves made.
    Won(usize),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress(n) => write!(f, "Now playing: Move {n}"),
            Status::Won(n) => write!(f, "You won at move {n}!"),
        }
    }
}

/// Coarse lifecycle state of a game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No move made yet.
    NotStarted,
    /// At least one move made, board not yet covered.
    InProgress,
    /// Board covered. Only undo and restart have an effect.
    Won,
}

/// A single knight's tour session.
#[derive(Clone, Debug)]
pub struct Game {
    /// Board after each move; never empty.
    history: Vec<Board>,
    /// Square of the last move, `None` before the first move.
    current_tile: Option<Tile>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Start a game on the all-possible board.
    pub fn new() -> Self {
        Game {
            history: vec![Board::new()],
            current_tile: None,
        }
    }

    /// The board currently shown to the player.
    pub fn board(&self) -> &Board {
        // history is never empty
        &self.history[self.history.len() - 1]
    }

    /// All snapshots, oldest first. Entry 0 is the starting board.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Square of the last move.
    pub fn current_tile(&self) -> Option<Tile> {
        self.current_tile
    }

    /// Number of moves made so far.
    pub fn move_count(&self) -> usize {
        self.history.len() - 1
    }

    /// Squares the knight may jump to next. Empty once the game is won.
    pub fn legal_moves(&self) -> Vec<Tile> {
        if check_win(self.board()) {
            return Vec::new();
        }
        self.board().legal_moves()
    }

    /// Tiles of every move made, in order.
    pub fn moves(&self) -> Vec<Tile> {
        self.history
            .iter()
            .skip(1)
            .filter_map(Board::find_current)
            .collect()
    }

    /// Progress line for the current board, derived from the history.
    pub fn status(&self) -> Status {
        if check_win(self.board()) {
            Status::Won(self.move_count())
        } else {
            Status::InProgress(self.history.len())
        }
    }

    /// Lifecycle state of the game, derived from the history.
    pub fn phase(&self) -> Phase {
        if self.history.len() == 1 {
            Phase::NotStarted
        } else if check_win(self.board()) {
            Phase::Won
        } else {
            Phase::InProgress
        }
    }

    /// Jump the knight to (row, col).
    ///
    /// Returns `false` and changes nothing if the game is already won or the
    /// square is not a possible move (including squares off the board).
    #[instrument(level = "debug", skip(self))]
    pub fn play(&mut self, row: i32, col: i32) -> bool {
        let board = self.board();
        if check_win(board) {
            debug!("move ignored, game already won");
            return false;
        }
        if !is_legal_move(board, row, col) {
            debug!("move ignored, not a possible move");
            return false;
        }

        let (row, col) = (row as usize, col as usize);
        let next = board.after_jump(row, col);
        self.history.push(next);
        self.current_tile = Some((row, col));

        if check_win(&next) {
            info!(moves = self.move_count(), "tour complete");
        }
        true
    }

    /// Take back the last move.
    ///
    /// Returns `false` and changes nothing if no move has been made.
    #[instrument(level = "debug", skip(self))]
    pub fn undo(&mut self) -> bool {
        if self.history.len() <= 1 {
            debug!("undo ignored, nothing to undo");
            return false;
        }
        self.history.pop();
        self.current_tile = self.board().find_current();
        debug!(current = ?self.current_tile, "undone");
        true
    }

    /// Return to the starting board.
    #[instrument(level = "debug", skip(self))]
    pub fn restart(&mut self) {
        self.history.truncate(1);
        self.current_tile = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Cell;
    use crate::constants::BOARDSIZE;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.status(), Status::InProgress(1));
        assert_eq!(game.phase(), Phase::NotStarted);
        assert_eq!(game.current_tile(), None);
        assert_eq!(game.board().count(Cell::Possible), BOARDSIZE);
    }

    #[test]
    fn test_first_move() {
        let mut game = Game::new();
        assert!(game.play(3, 3));
        assert_eq!(game.current_tile(), Some((3, 3)));
        assert_eq!(game.status(), Status::InProgress(2));
        assert_eq!(game.phase(), Phase::InProgress);
        assert_eq!(game.board().get(3, 3), Cell::Current);
        assert_eq!(game.board().count(Cell::Possible), 8);
    }

    #[test]
    fn test_second_move_settles_previous() {
        let mut game = Game::new();
        assert!(game.play(0, 0));
        assert!(game.play(2, 1));
        let board = game.board();
        assert_eq!(board.get(2, 1), Cell::Current);
        // (0,0) is visited and reachable again from (2,1)
        assert_eq!(board.get(0, 0), Cell::PossibleMarked);
        // Former highlight that is not reachable any more
        assert_eq!(board.get(1, 2), Cell::Unmarked);
        assert_eq!(board.count(Cell::Current), 1);
        assert_eq!(board.count(Cell::Possible), 5);
    }

    #[test]
    fn test_revisit_allowed_via_possible_marked() {
        let mut game = Game::new();
        assert!(game.play(0, 0));
        assert!(game.play(2, 1));
        assert_eq!(game.board().get(0, 0), Cell::PossibleMarked);
        assert!(game.play(0, 0));
        assert_eq!(game.board().get(0, 0), Cell::Current);
        assert_eq!(game.board().get(2, 1), Cell::PossibleMarked);
    }

    #[test]
    fn test_illegal_move_is_noop() {
        let mut game = Game::new();
        game.play(3, 3);
        let before = *game.board();
        assert!(!game.play(0, 0));
        assert!(!game.play(-1, 5));
        assert!(!game.play(8, 2));
        assert_eq!(*game.board(), before);
        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_tile(), Some((3, 3)));
    }

    #[test]
    fn test_undo_on_new_game_is_noop() {
        let mut game = Game::new();
        assert!(!game.undo());
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_tile(), None);
    }

    #[test]
    fn test_undo_restores_current_tile() {
        let mut game = Game::new();
        game.play(0, 0);
        game.play(2, 1);
        assert!(game.undo());
        assert_eq!(game.current_tile(), Some((0, 0)));
        assert!(game.undo());
        assert_eq!(game.current_tile(), None);
        assert_eq!(*game.board(), Board::new());
    }

    #[test]
    fn test_restart() {
        let mut game = Game::new();
        game.play(0, 0);
        game.play(2, 1);
        game.restart();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_tile(), None);
        assert_eq!(game.phase(), Phase::NotStarted);
    }

    #[test]
    fn test_moves() {
        let mut game = Game::new();
        game.play(0, 0);
        game.play(2, 1);
        game.play(0, 2);
        assert_eq!(game.moves(), vec![(0, 0), (2, 1), (0, 2)]);
        assert_eq!(game.move_count(), 3);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(Status::InProgress(1).to_string(), "Now playing: Move 1");
        assert_eq!(Status::Won(64).to_string(), "You won at move 64!");
    }
}
