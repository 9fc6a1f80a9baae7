//! Board geometry and display constants.
//!
//! The board is a plain 1D array of `N * N` cells indexed `row * N + col`.
//! Row 0 is the top of the board (rank 8 in chess notation).

// =============================================================================
// Board Geometry
// =============================================================================

/// Board size (NxN).
pub const N: usize = 8;

/// Total number of cells on the board.
pub const BOARDSIZE: usize = N * N;

// =============================================================================
// Knight Moves
// =============================================================================

/// The eight (row, col) offsets a knight may jump.
pub const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (-1, -2),
    (-2, -1),
    (1, -2),
    (2, -1),
];

// =============================================================================
// Cell Glyphs (text rendering)
// =============================================================================

/// Unvisited square, not reachable this turn.
pub const GLYPH_UNMARKED: char = '.';

/// Visited square, not reachable this turn.
pub const GLYPH_MARKED: char = 'x';

/// The knight.
pub const GLYPH_CURRENT: char = 'N';

/// Unvisited square the knight can jump to.
pub const GLYPH_POSSIBLE: char = 'o';

/// Visited square the knight can jump to.
pub const GLYPH_POSSIBLE_MARKED: char = '*';

// =============================================================================
// Playouts
// =============================================================================

/// Upper bound on the length of a random playout.
pub const MAX_PLAYOUT_LEN: usize = BOARDSIZE * 100;
