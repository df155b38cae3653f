//! The shared board of played melds.
//!
//! The board is a dumb container: it never validates what is put on it.
//! Validity is decided by the rules engine. Meld positions are stable
//! within a turn so `AddToExistingSet` can address them by index.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use super::tile::{tile_counts, Tile};

/// One played run or group, in the order the tiles were laid down.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Meld {
    tiles: Vec<Tile>,
}

impl Meld {
    /// Create a meld from tiles.
    #[must_use]
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// The meld's tiles.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// This meld followed by `extra`.
    #[must_use]
    pub fn extended(&self, extra: &[Tile]) -> Meld {
        let mut tiles = Vec::with_capacity(self.tiles.len() + extra.len());
        tiles.extend_from_slice(&self.tiles);
        tiles.extend_from_slice(extra);
        Meld { tiles }
    }
}

impl Deref for Meld {
    type Target = [Tile];

    fn deref(&self) -> &Self::Target {
        &self.tiles
    }
}

impl From<Vec<Tile>> for Meld {
    fn from(tiles: Vec<Tile>) -> Self {
        Self::new(tiles)
    }
}

impl std::fmt::Display for Meld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", tile)?;
        }
        f.write_str("]")
    }
}

/// Ordered collection of melds currently in play.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    melds: Vec<Meld>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board holding `melds`.
    #[must_use]
    pub fn from_melds(melds: Vec<Meld>) -> Self {
        Self { melds }
    }

    /// Append a meld. No validation.
    pub fn play_set(&mut self, meld: Meld) {
        self.melds.push(meld);
    }

    /// Meld at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Meld> {
        self.melds.get(index)
    }

    /// Replace the meld at `index`, returning the old one.
    ///
    /// Returns `None` (and changes nothing) if `index` is out of range.
    pub fn replace(&mut self, index: usize, meld: Meld) -> Option<Meld> {
        self.melds
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, meld))
    }

    /// Replace every meld on the board.
    pub fn set_melds(&mut self, melds: Vec<Meld>) {
        self.melds = melds;
    }

    /// All melds in board order.
    #[must_use]
    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    /// Number of melds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.melds.len()
    }

    /// Check if nothing has been played.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.melds.is_empty()
    }

    /// Iterate over every tile on the board.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.melds.iter().flat_map(|m| m.tiles.iter())
    }

    /// Total number of tiles on the board.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.melds.iter().map(|m| m.len()).sum()
    }

    /// Tile multiset of the board.
    #[must_use]
    pub fn tile_counts(&self) -> FxHashMap<Tile, usize> {
        tile_counts(self.tiles().copied())
    }
}
