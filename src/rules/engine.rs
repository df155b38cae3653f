//! Rules engine trait for tile validation.
//!
//! Implementations decide which tile sequences are legal melds:
//! - Meld validity (required)
//! - Board validity (default: every meld valid)
//! - Win condition (default: some hand is empty)
//!
//! The turn manager only talks to the rules through this trait, so a
//! variant ruleset can be swapped in without touching the commit logic.

use serde::{Deserialize, Serialize};

use super::meld;
use crate::core::board::Board;
use crate::core::player::PlayerId;
use crate::core::state::GameState;
use crate::core::tile::Tile;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player emptied their hand.
    Winner(PlayerId),
    /// The turn cap was reached with no winner.
    Stalemate,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `is_valid_meld`: must be pure; called on tentative state mid-turn
/// - `is_valid_board`: same answer for the same board, every time
/// - `is_terminal`: return `None` while the game continues
pub trait RulesEngine {
    /// Check whether `tiles` form a legal run or group.
    fn is_valid_meld(&self, tiles: &[Tile]) -> bool;

    /// Check whether every meld on `board` is legal.
    ///
    /// An empty board is valid.
    fn is_valid_board(&self, board: &Board) -> bool {
        board.melds().iter().all(|m| self.is_valid_meld(m))
    }

    /// Check if the game is over.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.winner().map(GameResult::Winner)
    }
}

/// Standard run and group rules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardRules;

impl StandardRules {
    /// See [`meld::is_valid_run`].
    #[must_use]
    pub fn is_valid_run(&self, tiles: &[Tile]) -> bool {
        meld::is_valid_run(tiles)
    }

    /// See [`meld::is_valid_group`].
    #[must_use]
    pub fn is_valid_group(&self, tiles: &[Tile]) -> bool {
        meld::is_valid_group(tiles)
    }
}

impl RulesEngine for StandardRules {
    fn is_valid_meld(&self, tiles: &[Tile]) -> bool {
        meld::is_valid_meld(tiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::Meld;
    use crate::core::tile::parse_tiles;

    fn meld(s: &str) -> Meld {
        Meld::new(parse_tiles(s).unwrap())
    }

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(PlayerId::new(1));
        assert!(!result.is_winner(PlayerId::new(0)));
        assert!(result.is_winner(PlayerId::new(1)));
        assert!(!GameResult::Stalemate.is_winner(PlayerId::new(0)));
    }

    #[test]
    fn test_empty_board_is_valid() {
        assert!(StandardRules.is_valid_board(&Board::new()));
    }

    #[test]
    fn test_one_bad_meld_spoils_the_board() {
        let good = Board::from_melds(vec![meld("r1 r2 r3"), meld("b5 g5 y5")]);
        assert!(StandardRules.is_valid_board(&good));

        let bad = Board::from_melds(vec![meld("r1 r2 r3"), meld("r5 r5 g5"), meld("b5 g5 y5")]);
        assert!(!StandardRules.is_valid_board(&bad));
    }

    #[test]
    fn test_board_validity_is_pure() {
        let board = Board::from_melds(vec![meld("r1 j r3"), meld("y9 y10 y11 y12")]);
        let first = StandardRules.is_valid_board(&board);
        let second = StandardRules.is_valid_board(&board);
        assert_eq!(first, second);
        assert_eq!(board, Board::from_melds(vec![meld("r1 j r3"), meld("y9 y10 y11 y12")]));
    }

    #[test]
    fn test_run_and_group_passthrough() {
        let tiles = parse_tiles("r5 b5 g5").unwrap();
        assert!(!StandardRules.is_valid_run(&tiles));
        assert!(StandardRules.is_valid_group(&tiles));
    }
}
