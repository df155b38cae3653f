//! Game configuration.
//!
//! Controls deck composition, the opening deal and the length cap of the
//! orchestration loop. The seed is not part of the config; it is passed to
//! `RummikubBuilder::build`.

use serde::{Deserialize, Serialize};

use super::deck::{STANDARD_COPIES, STANDARD_JOKERS};
use super::tile::{Color, MAX_NUMBER};

/// Tiles dealt to each player at the start of a standard game.
pub const STANDARD_HAND_SIZE: usize = 14;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Tiles dealt to each player by `deal_tiles`.
    pub starting_hand_size: usize,

    /// Copies of every color × number in the deck.
    pub tile_copies: u8,

    /// Jokers in the deck.
    pub joker_count: u8,

    /// Turn cap for `play_game` (0 = unlimited).
    pub max_turns: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_hand_size: STANDARD_HAND_SIZE,
            tile_copies: STANDARD_COPIES,
            joker_count: STANDARD_JOKERS,
            max_turns: 1000,
        }
    }
}

impl GameConfig {
    /// Standard rules: 106 tiles, 14-tile hands.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_starting_hand_size(mut self, size: usize) -> Self {
        self.starting_hand_size = size;
        self
    }

    /// Set the number of copies of each numbered tile.
    #[must_use]
    pub fn with_tile_copies(mut self, copies: u8) -> Self {
        self.tile_copies = copies;
        self
    }

    /// Set the number of jokers.
    #[must_use]
    pub fn with_joker_count(mut self, jokers: u8) -> Self {
        self.joker_count = jokers;
        self
    }

    /// Set the turn cap for `play_game` (0 = unlimited).
    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// Number of tiles a deck built from this config holds.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        Color::ALL.len() * MAX_NUMBER as usize * self.tile_copies as usize + self.joker_count as usize
    }
}
