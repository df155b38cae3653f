//! Error types for tile parsing and turn execution.
//!
//! Validation predicates (`is_valid_run`, `is_valid_board`, ...) answer with a
//! plain `bool`. Anything that can reject a player's turn reports *why* through
//! [`TurnError`], so callers can branch without parsing log text.

use thiserror::Error;

use crate::core::player::PlayerId;
use crate::core::tile::Tile;

/// Errors produced when parsing the text form of a tile (`r7`, `j`, ...).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TileParseError {
    /// Input was empty or whitespace.
    #[error("empty tile string")]
    Empty,

    /// First character is not one of `r`, `b`, `g`, `y`.
    #[error("invalid tile color: {0:?}")]
    InvalidColor(String),

    /// Number part missing or not an integer.
    #[error("invalid tile number: {0:?}")]
    InvalidNumber(String),

    /// Number parsed but lies outside 1..=13.
    #[error("tile number must be 1-13, got {0}")]
    NumberOutOfRange(u8),
}

/// Reasons a turn was rejected.
///
/// Whenever `play_turn` returns one of these, board, hands and deck are
/// exactly as they were before the call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TurnError {
    /// The game already has a winner.
    #[error("game is over")]
    GameOver,

    /// The player id does not belong to this game.
    #[error("unknown player: {0}")]
    UnknownPlayer(PlayerId),

    /// Somebody other than the current player tried to act.
    #[error("out of turn: expected {expected}, got {actual}")]
    OutOfTurn { expected: PlayerId, actual: PlayerId },

    /// A new set did not form a valid run or group.
    #[error("action {action}: invalid new set or run")]
    InvalidNewSet { action: usize },

    /// Adding tiles to an existing meld produced an invalid meld.
    #[error("action {action}: invalid addition to set {set_index}")]
    InvalidAddition { action: usize, set_index: usize },

    /// `set_index` does not address a meld on the board.
    #[error("action {action}: set index {set_index} out of range (board has {board_len} sets)")]
    SetIndexOutOfRange {
        action: usize,
        set_index: usize,
        board_len: usize,
    },

    /// A proposed board from a rearrangement contains an invalid meld.
    #[error("action {action}: invalid board rearrangement (set {set_index})")]
    InvalidRearrangement { action: usize, set_index: usize },

    /// A rearrangement dropped tiles that were on the board.
    #[error("action {action}: rearrangement does not reuse every board tile")]
    TilesNotConserved { action: usize },

    /// The action uses a tile the player does not hold.
    #[error("action {action}: tile {tile} is not in hand")]
    TilesNotInHand { action: usize, tile: Tile },

    /// A draw was submitted after tiles had already been played this turn.
    #[error("action {action}: draw is only allowed as the first action of a turn")]
    DrawAfterPlay { action: usize },

    /// After all actions the board contains an invalid meld.
    #[error("board is invalid after the turn")]
    InvalidBoard,

    /// The turn did not reduce the player's hand.
    #[error("no tiles were played from hand")]
    NoTilesPlayed,
}

/// Result type alias for turn execution.
pub type TurnResult<T> = Result<T, TurnError>;
