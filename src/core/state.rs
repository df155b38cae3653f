//! Game state: deck, board, players and turn bookkeeping.
//!
//! ## GameState
//!
//! Everything a turn can touch:
//! - Deck (shared draw pile)
//! - Board (shared played melds)
//! - Players (names and hands), seated in fixed order
//! - Current player and turn number
//! - History of committed actions
//!
//! ## TurnSnapshot
//!
//! Value copy of the board's melds and one player's hand, taken before a
//! turn's actions run. Restoring it undoes everything a rejected turn did.

use im::Vector;

use super::action::ActionRecord;
use super::board::{Board, Meld};
use super::deck::Deck;
use super::player::{Player, PlayerId, PlayerMap};
use super::tile::Tile;

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Shared draw pile.
    pub deck: Deck,

    /// Shared played melds.
    pub board: Board,

    /// Seated players, in turn order.
    players: PlayerMap<Player>,

    /// Whose turn it is.
    current_player: PlayerId,

    /// Turn number (starts at 1, counts committed turns).
    turn_number: u32,

    /// Committed actions. Persistent vector so cloning the state stays cheap.
    action_history: Vector<ActionRecord>,
}

impl GameState {
    /// Create a new game state with the given seated players and deck.
    ///
    /// Panics if `names` is empty or has more than 255 entries.
    #[must_use]
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>, deck: Deck) -> Self {
        let players = names.into_iter().map(Player::new).collect();
        Self {
            deck,
            board: Board::new(),
            players: PlayerMap::from_vec(players),
            current_player: PlayerId::new(0),
            turn_number: 1,
            action_history: Vector::new(),
        }
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        PlayerId::all(self.player_count())
    }

    /// Check whether `player` is seated in this game.
    #[must_use]
    pub fn has_player(&self, player: PlayerId) -> bool {
        self.players.contains(player)
    }

    /// Get a player.
    ///
    /// Panics if `player` is not seated; see [`GameState::has_player`].
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    /// Get a mutable player.
    pub fn player_mut(&mut self, player: PlayerId) -> &mut Player {
        &mut self.players[player]
    }

    /// All players in seat order.
    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    /// Whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// Draw one tile from the deck into `player`'s hand.
    ///
    /// `None` (and no change) when the deck is empty.
    pub fn draw_for(&mut self, player: PlayerId) -> Option<Tile> {
        self.players[player].draw_tile(&mut self.deck)
    }

    // === Turn Advancement ===

    /// Pass play to the next seat and bump the turn number.
    pub fn advance_turn(&mut self) {
        self.current_player = self.current_player.next(self.player_count());
        self.turn_number += 1;
    }

    // === Action History ===

    /// Record a committed action.
    pub fn record_action(&mut self, record: ActionRecord) {
        self.action_history.push_back(record);
    }

    /// Committed actions, oldest first.
    #[must_use]
    pub fn action_history(&self) -> &Vector<ActionRecord> {
        &self.action_history
    }

    // === Snapshots ===

    /// Copy the board and `player`'s hand.
    #[must_use]
    pub fn snapshot(&self, player: PlayerId) -> TurnSnapshot {
        TurnSnapshot {
            player,
            board: self.board.melds().to_vec(),
            hand: self.players[player].hand().to_vec(),
        }
    }

    /// Put the board and the snapshotted player's hand back.
    pub fn restore(&mut self, snapshot: TurnSnapshot) {
        self.board.set_melds(snapshot.board);
        self.players[snapshot.player].set_hand(snapshot.hand);
    }

    // === Queries ===

    /// First player (in seat order) whose hand is empty.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.players
            .iter()
            .find(|(_, p)| p.hand_size() == 0)
            .map(|(id, _)| id)
    }

    /// Tiles in the deck, on the board and in every hand.
    ///
    /// Constant over the whole game.
    #[must_use]
    pub fn total_tiles(&self) -> usize {
        self.deck.len()
            + self.board.tile_count()
            + self.players.values().map(Player::hand_size).sum::<usize>()
    }

    /// Every tile in hands or on the board.
    pub fn tiles_in_play(&self) -> impl Iterator<Item = &Tile> {
        self.board
            .tiles()
            .chain(self.players.values().flat_map(|p| p.hand().iter()))
    }
}

/// Pre-turn copy of the board and the acting player's hand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnSnapshot {
    player: PlayerId,
    board: Vec<Meld>,
    hand: Vec<Tile>,
}

impl TurnSnapshot {
    /// The player whose hand was captured.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Hand size at snapshot time.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }
}
