//! Rule validation and turn execution.
//!
//! - `meld`: run and group validity
//! - `engine`: the `RulesEngine` trait and the standard ruleset
//! - `turn`: snapshot, apply, verify, commit or roll back
//!
//! The turn manager calls into `RulesEngine` but never hardcodes what a
//! legal meld looks like.

pub mod meld;
pub mod engine;
pub mod turn;

pub use meld::{classify, is_valid_group, is_valid_meld, is_valid_run, MeldKind};
pub use engine::{GameResult, RulesEngine, StandardRules};
pub use turn::{execute_turn, TurnOutcome, TurnTransaction};
