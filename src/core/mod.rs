//! Core game types: tiles, deck, players, board, actions, state, RNG,
//! configuration.
//!
//! These are plain data holders. Nothing here decides whether a meld is
//! legal; that lives in `rules`.

pub mod tile;
pub mod rng;
pub mod deck;
pub mod player;
pub mod board;
pub mod config;
pub mod action;
pub mod state;

pub use tile::{parse_tiles, tile_counts, Color, Tile, MAX_NUMBER, MIN_NUMBER};
pub use rng::GameRng;
pub use deck::{Deck, STANDARD_DECK_SIZE};
pub use player::{Player, PlayerId, PlayerMap};
pub use board::{Board, Meld};
pub use config::{GameConfig, STANDARD_HAND_SIZE};
pub use action::{ActionRecord, TileList, TurnAction};
pub use state::{GameState, TurnSnapshot};
