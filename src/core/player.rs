//! Players, player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! Supports iteration and indexing by `PlayerId`.
//!
//! ## Player
//!
//! A display name plus a hand of tiles. The hand is a multiset: tiles are
//! removed by value, not by position.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::deck::Deck;
use super::tile::{tile_counts, Tile};
use crate::error::{TurnError, TurnResult};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rummikub_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The player seated after this one, wrapping around.
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use rummikub_engine::core::{PlayerId, PlayerMap};
///
/// let mut hand_sizes: PlayerMap<usize> = PlayerMap::new(4, |_| 14);
/// assert_eq!(hand_sizes[PlayerId::new(0)], 14);
///
/// hand_sizes[PlayerId::new(1)] = 13;
/// assert_eq!(hand_sizes[PlayerId::new(1)], 13);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    ///
    /// The factory receives the `PlayerId` for each player.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a PlayerMap from one value per player, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Check whether `player` has an entry.
    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        player.index() < self.data.len()
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seated player: display name and hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name.
    pub name: String,
    hand: Vec<Tile>,
}

impl Player {
    /// Create a player with an empty hand.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
        }
    }

    /// Tiles currently held, in the order they were received.
    #[must_use]
    pub fn hand(&self) -> &[Tile] {
        &self.hand
    }

    /// Number of tiles held.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Add a tile to the hand.
    pub fn receive(&mut self, tile: Tile) {
        self.hand.push(tile);
    }

    /// Draw one tile from `deck` into the hand.
    ///
    /// Drawing from an empty deck leaves the hand unchanged and returns `None`.
    pub fn draw_tile(&mut self, deck: &mut Deck) -> Option<Tile> {
        let tile = deck.draw()?;
        self.hand.push(tile);
        Some(tile)
    }

    /// Check that the hand contains every tile of `tiles`, counting
    /// duplicates. Returns the first tile that is missing.
    #[must_use]
    pub fn missing_tile(&self, tiles: &[Tile]) -> Option<Tile> {
        let mut counts = tile_counts(self.hand.iter().copied());
        for &tile in tiles {
            match counts.get_mut(&tile) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return Some(tile),
            }
        }
        None
    }

    /// Check that the hand contains every tile of `tiles`.
    #[must_use]
    pub fn holds(&self, tiles: &[Tile]) -> bool {
        self.missing_tile(tiles).is_none()
    }

    /// Remove `tiles` from the hand by value.
    ///
    /// The hand is left untouched if any tile is missing. `action` is the
    /// index reported in the error.
    pub fn play_tiles(&mut self, tiles: &[Tile], action: usize) -> TurnResult<()> {
        if let Some(tile) = self.missing_tile(tiles) {
            return Err(TurnError::TilesNotInHand { action, tile });
        }
        for tile in tiles {
            if let Some(pos) = self.hand.iter().position(|t| t == tile) {
                self.hand.remove(pos);
            }
        }
        Ok(())
    }

    /// Replace the whole hand. Used by rollback.
    pub(crate) fn set_hand(&mut self, hand: Vec<Tile>) {
        self.hand = hand;
    }
}
