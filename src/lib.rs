//! Knight's Tour: a single-player puzzle on an 8x8 board.
//!
//! The player jumps a chess knight around the board, trying to cover every
//! square. Any square is a valid start; after that only knight jumps are
//! allowed. Every move can be undone, and the game can be restarted.
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions, knight offsets, display glyphs
//! - [`board`] - Cell states and the pure move rules
//! - [`game`] - Move history, undo/restart, status
//! - [`protocol`] - Line-oriented text front end
//! - [`playout`] - Random walks used by the demo
//!
//! ## Example
//!
//! ```
//! use knights_tour::game::{Game, Status};
//!
//! let mut game = Game::new();
//! assert!(game.play(3, 3));
//! assert!(!game.play(0, 0)); // not a knight jump away
//! assert_eq!(game.status(), Status::InProgress(2));
//!
//! game.undo();
//! assert_eq!(game.current_tile(), None);
//! ```

pub mod board;
pub mod constants;
pub mod game;
pub mod playout;
pub mod protocol;
