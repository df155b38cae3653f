//! Rummikub: runs, groups, jokers and a shared board.
//!
//! - 2 copies of each color × number (1-13) plus 2 jokers, 106 tiles
//! - Each player is dealt 14 tiles
//! - On your turn: draw one tile, or lay down tiles so the whole board
//!   stays valid and your hand shrinks
//! - First player to empty their hand wins
//!
//! Supports 1-255 seats; 2-4 is the usual table.

mod game;

pub use game::{Rummikub, RummikubBuilder};
