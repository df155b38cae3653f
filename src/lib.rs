//! # rummikub-engine
//!
//! A rules engine for Rummikub-style tile games.
//!
//! ## Design Principles
//!
//! 1. **All-or-Nothing Turns**: A turn's actions run against the live state
//!    and are either committed together or rolled back to a snapshot. A
//!    rejected turn is never half-applied.
//!
//! 2. **Board-Wide Validity**: The commit check looks at the whole board,
//!    not just the melds touched this turn. Rearranging is free as long as
//!    every meld is legal at the end.
//!
//! 3. **Rules Behind a Trait**: The turn manager talks to `RulesEngine`
//!    only. `StandardRules` implements the usual runs and groups.
//!
//! ## Architecture
//!
//! - **Deterministic Shuffles**: ChaCha8 seeded per game, with independent
//!   streams per context, so equal seeds give equal decks.
//!
//! - **Persistent History**: Committed actions live in an `im::Vector`, so
//!   cloning a `GameState` stays cheap.
//!
//! ## Modules
//!
//! - `core`: Tiles, deck, players, board, actions, state, RNG, configuration
//! - `rules`: Meld validation, the `RulesEngine` trait, turn execution
//! - `games`: The playable Rummikub facade
//! - `error`: Turn and parse errors

pub mod core;
pub mod error;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    parse_tiles, Color, Tile,
    Deck, GameRng,
    Player, PlayerId, PlayerMap,
    Board, Meld,
    TurnAction, ActionRecord,
    GameConfig, GameState,
};

pub use crate::rules::{
    is_valid_group, is_valid_meld, is_valid_run,
    GameResult, RulesEngine, StandardRules,
    TurnOutcome,
};

pub use crate::error::{TileParseError, TurnError, TurnResult};

pub use crate::games::rummikub::{Rummikub, RummikubBuilder};
