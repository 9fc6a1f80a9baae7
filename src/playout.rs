//! Random playouts.
//!
//! A playout jumps the knight to a uniformly random possible square until
//! the board is covered. Visited squares stay reachable, so the knight never
//! gets stuck and a walk always ends covered unless it hits
//! [`MAX_PLAYOUT_LEN`] first. There is no lookahead: walks revisit squares
//! freely and are nowhere near a tour that visits each square once.

use tracing::debug;

use crate::board::Tile;
use crate::constants::MAX_PLAYOUT_LEN;
use crate::game::{Game, Phase};

/// Play random legal moves on `game` until it is won, no move remains, or
/// the game reaches [`MAX_PLAYOUT_LEN`] moves.
///
/// Returns the tiles played, in order.
pub fn random_walk(game: &mut Game, rng: &mut fastrand::Rng) -> Vec<Tile> {
    let mut played = Vec::new();

    while game.move_count() < MAX_PLAYOUT_LEN {
        let moves = game.legal_moves();
        if moves.is_empty() {
            break;
        }
        let (row, col) = moves[rng.usize(..moves.len())];
        if !game.play(row as i32, col as i32) {
            break;
        }
        played.push((row, col));
    }

    debug!(
        moves = played.len(),
        won = game.phase() == Phase::Won,
        "playout finished"
    );
    played
}
