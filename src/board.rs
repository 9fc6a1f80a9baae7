//! Board representation and the pure knight-move rules.
//!
//! Every function here takes a board by reference or value and never keeps
//! state of its own. The game controller in [`crate::game`] is the only
//! owner of boards over time.

use std::fmt;

use crate::constants::*;

/// A (row, col) square on the board. Both coordinates are in `0..N`.
pub type Tile = (usize, usize);

/// Visitation status of a single square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Not visited, not a possible next move.
    Unmarked,
    /// Visited, not a possible next move.
    Marked,
    /// The knight's present position.
    Current,
    /// Not visited, possible next move.
    Possible,
    /// Visited, possible next move.
    PossibleMarked,
}

impl Cell {
    /// Character used by the text renderer.
    pub fn glyph(self) -> char {
        match self {
            Cell::Unmarked => GLYPH_UNMARKED,
            Cell::Marked => GLYPH_MARKED,
            Cell::Current => GLYPH_CURRENT,
            Cell::Possible => GLYPH_POSSIBLE,
            Cell::PossibleMarked => GLYPH_POSSIBLE_MARKED,
        }
    }

    /// State of the cell once the knight leaves the current position.
    ///
    /// The old knight square and every possible-marked square become
    /// visited; highlighted but unvisited squares lose their highlight.
    fn settle(self) -> Cell {
        match self {
            Cell::Current | Cell::PossibleMarked => Cell::Marked,
            Cell::Possible => Cell::Unmarked,
            Cell::Unmarked => Cell::Unmarked,
            Cell::Marked => Cell::Marked,
        }
    }

    /// State of the cell when it becomes reachable by the knight.
    fn highlight(self) -> Cell {
        match self {
            Cell::Unmarked => Cell::Possible,
            Cell::Marked => Cell::PossibleMarked,
            Cell::Current | Cell::Possible | Cell::PossibleMarked => self,
        }
    }
}

/// An 8x8 board of cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; BOARDSIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// The starting board: the knight may start on any square.
    pub fn new() -> Self {
        Self::filled(Cell::Possible)
    }

    /// A board with every cell set to `cell`.
    pub fn filled(cell: Cell) -> Self {
        Board {
            cells: [cell; BOARDSIZE],
        }
    }

    fn idx(row: usize, col: usize) -> usize {
        row * N + col
    }

    /// Get the cell at a square. Panics if the square is off the board.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[Self::idx(row, col)]
    }

    /// Overwrite the cell at a square. Panics if the square is off the board.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[Self::idx(row, col)] = cell;
    }

    /// All cells in `row * N + col` order.
    pub fn cells(&self) -> &[Cell; BOARDSIZE] {
        &self.cells
    }

    /// Number of cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Position of the knight, if it has been placed.
    pub fn find_current(&self) -> Option<Tile> {
        self.cells
            .iter()
            .position(|&c| c == Cell::Current)
            .map(|i| (i / N, i % N))
    }

    /// Squares the knight may jump to next.
    pub fn legal_moves(&self) -> Vec<Tile> {
        (0..BOARDSIZE)
            .map(|i| (i / N, i % N))
            .filter(|&(r, c)| is_legal_move(self, r as i32, c as i32))
            .collect()
    }

    /// Board that results from the knight jumping to (row, col).
    ///
    /// Does not check legality; see [`is_legal_move`].
    pub fn after_jump(&self, row: usize, col: usize) -> Board {
        let mut next = *self;
        for c in &mut next.cells {
            *c = c.settle();
        }
        next.set(row, col, Cell::Current);
        mark_possible_moves(&next, row, col)
    }
}

/// Check whether (row, col) lies on the board.
pub fn is_on_board(row: i32, col: i32) -> bool {
    (0..N as i32).contains(&row) && (0..N as i32).contains(&col)
}

/// Check whether the knight may jump to (row, col) on this board.
pub fn is_legal_move(board: &Board, row: i32, col: i32) -> bool {
    if !is_on_board(row, col) {
        return false;
    }
    matches!(
        board.get(row as usize, col as usize),
        Cell::Possible | Cell::PossibleMarked
    )
}

/// All on-board squares a knight at (row, col) attacks.
///
/// A corner yields 2 squares, the centre 8.
pub fn knight_targets(row: usize, col: usize) -> Vec<Tile> {
    KNIGHT_DELTAS
        .iter()
        .map(|&(dr, dc)| (row as i32 + dr, col as i32 + dc))
        .filter(|&(r, c)| is_on_board(r, c))
        .map(|(r, c)| (r as usize, c as usize))
        .collect()
}

/// Highlight the squares reachable from (row, col).
///
/// Unmarked targets become `Possible` and marked targets `PossibleMarked`.
/// Nothing outside the knight's targets is touched.
pub fn mark_possible_moves(board: &Board, row: usize, col: usize) -> Board {
    let mut next = *board;
    for (r, c) in knight_targets(row, col) {
        next.set(r, c, board.get(r, c).highlight());
    }
    next
}

/// Check whether every square has been covered.
///
/// Any cell that is not `Unmarked` or `Possible` counts as covered.
pub fn check_win(board: &Board) -> bool {
    board.cells.iter().all(|c| match c {
        Cell::Unmarked | Cell::Possible => false,
        Cell::Marked | Cell::Current | Cell::PossibleMarked => true,
    })
}

/// Parse a square in chess notation (e.g. "c5") into a tile.
///
/// Files `a`-`h` are columns 0-7; rank 8 is row 0.
pub fn parse_coord(s: &str) -> Option<Tile> {
    let bytes = s.trim().as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..b'a' + N as u8).contains(&file) || !(b'1'..b'1' + N as u8).contains(&rank) {
        return None;
    }
    let col = (file - b'a') as usize;
    let row = N - 1 - (rank - b'1') as usize;
    Some((row, col))
}

/// Convert a tile to chess notation (e.g. "c5").
pub fn str_coord((row, col): Tile) -> String {
    let file = (b'a' + col as u8) as char;
    format!("{file}{}", N - row)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N {
            write!(f, "{} ", N - row)?;
            for col in 0..N {
                write!(f, "{} ", self.get(row, col).glyph())?;
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for col in 0..N {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)
    }
}
