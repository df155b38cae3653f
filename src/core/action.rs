//! Turn actions and the committed-action history.
//!
//! A turn is a list of [`TurnAction`]s. Each variant carries its own typed
//! payload:
//! - "Draw" = no payload, ends the turn
//! - "Play new set" = tiles from hand
//! - "Add to existing set" = tiles from hand + board index
//! - "Rearrange board" = the complete proposed board
//!
//! ## Example
//!
//! ```
//! use rummikub_engine::core::{parse_tiles, TurnAction};
//!
//! let play = TurnAction::play_new_set(parse_tiles("r1 r2 r3").unwrap());
//! let extend = TurnAction::add_to_existing_set(parse_tiles("r4").unwrap(), 0);
//!
//! assert_eq!(play.tiles_from_hand().len(), 3);
//! assert!(!extend.is_draw());
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Meld;
use super::player::PlayerId;
use super::tile::Tile;

/// Tiles submitted from a hand. Optimized for the common 1-4 tile case.
pub type TileList = SmallVec<[Tile; 4]>;

/// One step of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnAction {
    /// Draw one tile from the deck. Ends the turn.
    Draw,

    /// Lay down a new run or group from hand.
    PlayNewSet { tiles: TileList },

    /// Append tiles from hand to the meld at `set_index`.
    AddToExistingSet { tiles: TileList, set_index: usize },

    /// Replace the whole board. Tiles beyond the current board must come
    /// from the player's hand.
    RearrangeBoard { new_board: Vec<Meld> },
}

impl TurnAction {
    /// Create a play-new-set action.
    #[must_use]
    pub fn play_new_set(tiles: impl IntoIterator<Item = Tile>) -> Self {
        Self::PlayNewSet {
            tiles: tiles.into_iter().collect(),
        }
    }

    /// Create an add-to-existing-set action.
    #[must_use]
    pub fn add_to_existing_set(tiles: impl IntoIterator<Item = Tile>, set_index: usize) -> Self {
        Self::AddToExistingSet {
            tiles: tiles.into_iter().collect(),
            set_index,
        }
    }

    /// Create a rearrange-board action.
    #[must_use]
    pub fn rearrange_board(new_board: impl IntoIterator<Item = Meld>) -> Self {
        Self::RearrangeBoard {
            new_board: new_board.into_iter().collect(),
        }
    }

    /// Check if this is a draw.
    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, Self::Draw)
    }

    /// Tiles this action explicitly takes from hand.
    ///
    /// Empty for `Draw` and `RearrangeBoard`; a rearrangement's hand tiles
    /// are only known relative to the current board.
    #[must_use]
    pub fn tiles_from_hand(&self) -> &[Tile] {
        match self {
            Self::PlayNewSet { tiles } | Self::AddToExistingSet { tiles, .. } => tiles,
            Self::Draw | Self::RearrangeBoard { .. } => &[],
        }
    }

    /// Short name for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::PlayNewSet { .. } => "play_new_set",
            Self::AddToExistingSet { .. } => "add_to_existing_set",
            Self::RearrangeBoard { .. } => "rearrange_board",
        }
    }
}

/// A committed action with metadata for history tracking.
///
/// Only turns that commit are recorded; rejected turns leave no trace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: TurnAction,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number within the turn (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: TurnAction, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
