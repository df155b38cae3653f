//! The shared draw pile.
//!
//! A standard deck holds two copies of every color × number (104 tiles)
//! plus two jokers. The top of the deck is the end of the vector, so
//! drawing is an O(1) `pop`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rng::GameRng;
use super::tile::{Color, Tile, MAX_NUMBER, MIN_NUMBER};

/// Copies of each numbered tile in a standard deck.
pub const STANDARD_COPIES: u8 = 2;

/// Jokers in a standard deck.
pub const STANDARD_JOKERS: u8 = 2;

/// Size of a standard deck.
pub const STANDARD_DECK_SIZE: usize = 106;

/// Shuffled bag of tiles. Shrinks as tiles are drawn; never refilled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    tiles: Vec<Tile>,
}

impl Deck {
    /// Build the standard 106-tile deck and shuffle it with `rng`.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        Self::with_counts(STANDARD_COPIES, STANDARD_JOKERS, rng)
    }

    /// Build a deck with `copies` of every color × number plus `jokers`,
    /// then shuffle it with `rng`.
    #[must_use]
    pub fn with_counts(copies: u8, jokers: u8, rng: &mut GameRng) -> Self {
        let mut tiles = Self::population(copies, jokers);
        rng.shuffle(&mut tiles);
        debug!(tiles = tiles.len(), seed = rng.seed(), "deck shuffled");
        Self { tiles }
    }

    /// Stacked deck in the given order. The last tile is drawn first.
    #[must_use]
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Unshuffled tile population, in canonical order.
    #[must_use]
    pub fn population(copies: u8, jokers: u8) -> Vec<Tile> {
        let mut tiles =
            Vec::with_capacity(Color::ALL.len() * MAX_NUMBER as usize * copies as usize + jokers as usize);
        for color in Color::ALL {
            for number in MIN_NUMBER..=MAX_NUMBER {
                for _ in 0..copies {
                    tiles.push(Tile::new(color, number));
                }
            }
        }
        tiles.extend(std::iter::repeat(Tile::Joker).take(jokers as usize));
        tiles
    }

    /// Remove and return the top tile, or `None` when the deck is empty.
    pub fn draw(&mut self) -> Option<Tile> {
        self.tiles.pop()
    }

    /// Number of tiles left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if no tiles remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Remaining tiles, bottom first.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
