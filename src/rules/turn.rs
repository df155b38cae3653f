//! Turn execution with all-or-nothing commit.
//!
//! A turn is either a single `Draw` (which ends the turn at once) or a list
//! of play/rearrange actions judged as a unit:
//!
//! 1. Snapshot the board and the acting player's hand.
//! 2. Apply each action to the live state, stopping at the first failure.
//! 3. Require a valid board and a strictly smaller hand.
//! 4. Commit (record history, advance the seat) or restore the snapshot.
//!
//! The deck is never touched by play actions, so it is not part of the
//! snapshot.

use tracing::{debug, info, warn};

use super::engine::RulesEngine;
use crate::core::action::{ActionRecord, TurnAction};
use crate::core::board::Meld;
use crate::core::player::PlayerId;
use crate::core::state::{GameState, TurnSnapshot};
use crate::core::tile::Tile;
use crate::error::{TurnError, TurnResult};

/// What a committed turn did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The player drew. `None` when the deck was already empty.
    Drew { tile: Option<Tile> },
    /// The player laid down tiles.
    Played {
        /// Tiles that left the hand this turn.
        tiles_played: usize,
        /// Tiles still in hand.
        hand_remaining: usize,
    },
}

/// A turn in progress: the pre-turn snapshot plus the data needed to judge
/// the result.
#[derive(Debug)]
pub struct TurnTransaction {
    snapshot: TurnSnapshot,
}

impl TurnTransaction {
    /// Snapshot `player`'s hand and the board.
    #[must_use]
    pub fn begin(state: &GameState, player: PlayerId) -> Self {
        Self {
            snapshot: state.snapshot(player),
        }
    }

    /// Hand size when the turn started.
    #[must_use]
    pub fn initial_hand_size(&self) -> usize {
        self.snapshot.hand_size()
    }

    /// Check the commit rule against the tentative state.
    pub fn verify<R: RulesEngine + ?Sized>(&self, rules: &R, state: &GameState) -> TurnResult<()> {
        if !rules.is_valid_board(&state.board) {
            return Err(TurnError::InvalidBoard);
        }
        if state.player(self.snapshot.player()).hand_size() >= self.initial_hand_size() {
            return Err(TurnError::NoTilesPlayed);
        }
        Ok(())
    }

    /// Undo everything since `begin`.
    pub fn rollback(self, state: &mut GameState) {
        state.restore(self.snapshot);
    }
}

/// Execute `player`'s turn.
///
/// On `Err`, board, hands and deck are unchanged and the turn does not
/// advance.
pub fn execute_turn<R: RulesEngine + ?Sized>(
    rules: &R,
    state: &mut GameState,
    player: PlayerId,
    actions: &[TurnAction],
) -> TurnResult<TurnOutcome> {
    if !state.has_player(player) {
        return Err(TurnError::UnknownPlayer(player));
    }
    if rules.is_terminal(state).is_some() {
        return Err(TurnError::GameOver);
    }
    let expected = state.current_player();
    if player != expected {
        return Err(TurnError::OutOfTurn {
            expected,
            actual: player,
        });
    }

    if let Some(TurnAction::Draw) = actions.first() {
        return Ok(draw_and_end(state, player, actions.len() - 1));
    }

    let transaction = TurnTransaction::begin(state, player);
    let applied = actions
        .iter()
        .enumerate()
        .try_for_each(|(index, action)| apply_action(rules, state, player, index, action));
    let result = applied.and_then(|()| transaction.verify(rules, state));

    match result {
        Ok(()) => {
            let tiles_played =
                transaction.initial_hand_size() - state.player(player).hand_size();
            commit(state, player, actions);
            let hand_remaining = state.player(player).hand_size();
            info!(
                player = %state.player(player).name,
                tiles_played,
                hand_remaining,
                "turn committed"
            );
            Ok(TurnOutcome::Played {
                tiles_played,
                hand_remaining,
            })
        }
        Err(error) => {
            transaction.rollback(state);
            warn!(player = %state.player(player).name, %error, "turn rolled back");
            Err(error)
        }
    }
}

fn draw_and_end(state: &mut GameState, player: PlayerId, ignored: usize) -> TurnOutcome {
    let tile = state.draw_for(player);
    if ignored > 0 {
        debug!(ignored, "actions after draw ignored");
    }
    debug!(player = %state.player(player).name, drawn = tile.is_some(), "draw ends turn");
    commit(state, player, &[TurnAction::Draw]);
    TurnOutcome::Drew { tile }
}

fn commit(state: &mut GameState, player: PlayerId, actions: &[TurnAction]) {
    let turn = state.turn_number();
    for (sequence, action) in actions.iter().enumerate() {
        state.record_action(ActionRecord::new(player, action.clone(), turn, sequence as u32));
    }
    state.advance_turn();
}

/// Apply one action to the live state.
///
/// Leaves the state partially modified on error; the caller rolls back.
pub fn apply_action<R: RulesEngine + ?Sized>(
    rules: &R,
    state: &mut GameState,
    player: PlayerId,
    index: usize,
    action: &TurnAction,
) -> TurnResult<()> {
    debug!(action = action.kind(), index, "applying action");

    match action {
        TurnAction::Draw => Err(TurnError::DrawAfterPlay { action: index }),

        TurnAction::PlayNewSet { tiles } => {
            if let Some(tile) = state.player(player).missing_tile(tiles) {
                return Err(TurnError::TilesNotInHand { action: index, tile });
            }
            if !rules.is_valid_meld(tiles) {
                return Err(TurnError::InvalidNewSet { action: index });
            }
            state.player_mut(player).play_tiles(tiles, index)?;
            state.board.play_set(Meld::new(tiles.to_vec()));
            Ok(())
        }

        TurnAction::AddToExistingSet { tiles, set_index } => {
            let set_index = *set_index;
            let Some(existing) = state.board.get(set_index) else {
                return Err(TurnError::SetIndexOutOfRange {
                    action: index,
                    set_index,
                    board_len: state.board.len(),
                });
            };
            if let Some(tile) = state.player(player).missing_tile(tiles) {
                return Err(TurnError::TilesNotInHand { action: index, tile });
            }
            let combined = existing.extended(tiles);
            if !rules.is_valid_meld(&combined) {
                return Err(TurnError::InvalidAddition {
                    action: index,
                    set_index,
                });
            }
            state.player_mut(player).play_tiles(tiles, index)?;
            state.board.replace(set_index, combined);
            Ok(())
        }

        TurnAction::RearrangeBoard { new_board } => {
            if let Some(set_index) = new_board.iter().position(|m| !rules.is_valid_meld(m)) {
                return Err(TurnError::InvalidRearrangement {
                    action: index,
                    set_index,
                });
            }
            let from_hand = tiles_added(state, new_board)
                .ok_or(TurnError::TilesNotConserved { action: index })?;
            state.player_mut(player).play_tiles(&from_hand, index)?;
            state.board.set_melds(new_board.clone());
            Ok(())
        }
    }
}

/// Tiles `new_board` holds beyond the current board, in board order.
///
/// `None` if `new_board` is missing any tile of the current board.
fn tiles_added(state: &GameState, new_board: &[Meld]) -> Option<Vec<Tile>> {
    let mut unmatched = state.board.tile_counts();
    let mut added = Vec::new();
    for &tile in new_board.iter().flat_map(|m| m.tiles()) {
        match unmatched.get_mut(&tile) {
            Some(count) if *count > 0 => *count -= 1,
            _ => added.push(tile),
        }
    }
    if unmatched.values().any(|&count| count > 0) {
        return None;
    }
    Some(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::deck::Deck;
    use crate::core::tile::parse_tiles;
    use crate::rules::engine::StandardRules;

    fn t(s: &str) -> Vec<Tile> {
        parse_tiles(s).unwrap()
    }

    fn meld(s: &str) -> Meld {
        Meld::new(t(s))
    }

    /// Two players, player 0 holding `hand`, player 1 holding one tile.
    fn setup(hand: &str, board: Vec<Meld>) -> GameState {
        let mut state = GameState::new(["Jan", "Pat"], Deck::from_tiles(t("y1 y2")));
        for tile in t(hand) {
            state.player_mut(PlayerId::new(0)).receive(tile);
        }
        state.player_mut(PlayerId::new(1)).receive(Tile::Joker);
        state.board.set_melds(board);
        state
    }

    const P0: PlayerId = PlayerId::new(0);

    #[test]
    fn test_play_new_set_commits() {
        let mut state = setup("r1 r2 r3 b9", vec![]);

        let outcome =
            execute_turn(&StandardRules, &mut state, P0, &[TurnAction::play_new_set(t("r1 r2 r3"))]);

        assert_eq!(
            outcome,
            Ok(TurnOutcome::Played {
                tiles_played: 3,
                hand_remaining: 1
            })
        );
        assert_eq!(state.board.melds(), &[meld("r1 r2 r3")]);
        assert_eq!(state.player(P0).hand(), t("b9").as_slice());
        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.action_history().len(), 1);
    }

    #[test]
    fn test_invalid_set_rolls_back() {
        let mut state = setup("r1 r2 r4 b9", vec![]);
        let before = state.clone();

        let result =
            execute_turn(&StandardRules, &mut state, P0, &[TurnAction::play_new_set(t("r1 r2 r4"))]);

        assert_eq!(result, Err(TurnError::InvalidNewSet { action: 0 }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_second_action_failure_undoes_first() {
        let mut state = setup("r1 r2 r3 b9 g9", vec![]);
        let before = state.clone();

        let result = execute_turn(
            &StandardRules,
            &mut state,
            P0,
            &[
                TurnAction::play_new_set(t("r1 r2 r3")),
                TurnAction::add_to_existing_set(t("b9"), 0),
            ],
        );

        assert_eq!(
            result,
            Err(TurnError::InvalidAddition {
                action: 1,
                set_index: 0
            })
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_draw_ends_turn() {
        let mut state = setup("r1", vec![]);

        let result = execute_turn(
            &StandardRules,
            &mut state,
            P0,
            &[TurnAction::Draw, TurnAction::play_new_set(t("r1 r2 r3"))],
        );

        assert_eq!(result, Ok(TurnOutcome::Drew { tile: Some(t("y2")[0]) }));
        assert_eq!(state.player(P0).hand_size(), 2);
        assert!(state.board.is_empty());
        assert_eq!(state.current_player(), PlayerId::new(1));
        assert_eq!(state.action_history().len(), 1);
    }

    #[test]
    fn test_draw_after_play_rejected() {
        let mut state = setup("r1 r2 r3", vec![]);
        let before = state.clone();

        let result = execute_turn(
            &StandardRules,
            &mut state,
            P0,
            &[TurnAction::play_new_set(t("r1 r2 r3")), TurnAction::Draw],
        );

        assert_eq!(result, Err(TurnError::DrawAfterPlay { action: 1 }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_empty_turn_plays_nothing() {
        let mut state = setup("r1", vec![]);
        let result = execute_turn(&StandardRules, &mut state, P0, &[]);
        assert_eq!(result, Err(TurnError::NoTilesPlayed));
        assert_eq!(state.current_player(), P0);
    }

    #[test]
    fn test_out_of_turn_and_unknown_player() {
        let mut state = setup("r1", vec![]);

        assert_eq!(
            execute_turn(&StandardRules, &mut state, PlayerId::new(1), &[TurnAction::Draw]),
            Err(TurnError::OutOfTurn {
                expected: P0,
                actual: PlayerId::new(1)
            })
        );
        assert_eq!(
            execute_turn(&StandardRules, &mut state, PlayerId::new(7), &[TurnAction::Draw]),
            Err(TurnError::UnknownPlayer(PlayerId::new(7)))
        );
    }

    #[test]
    fn test_rearrange_consumes_hand_tiles() {
        let mut state = setup("r4 b9", vec![meld("r1 r2 r3"), meld("b5 g5 y5")]);

        let result = execute_turn(
            &StandardRules,
            &mut state,
            P0,
            &[TurnAction::rearrange_board(vec![
                meld("b5 g5 y5"),
                meld("r1 r2 r3 r4"),
            ])],
        );

        assert!(result.is_ok());
        assert_eq!(state.player(P0).hand(), t("b9").as_slice());
        assert_eq!(state.board.len(), 2);
    }

    #[test]
    fn test_rearrange_must_keep_board_tiles() {
        let mut state = setup("r4 b9", vec![meld("r1 r2 r3"), meld("b5 g5 y5")]);
        let before = state.clone();

        let result = execute_turn(
            &StandardRules,
            &mut state,
            P0,
            &[TurnAction::rearrange_board(vec![meld("r1 r2 r3 r4")])],
        );

        assert_eq!(result, Err(TurnError::TilesNotConserved { action: 0 }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_tiles_added() {
        let state = setup("", vec![meld("r1 r2 r3")]);
        assert_eq!(
            tiles_added(&state, &[meld("r1 r2 r3 r4"), meld("b1 g1 j")]),
            Some(t("r4 b1 g1 j"))
        );
        assert_eq!(tiles_added(&state, &[meld("r1 r2 j")]), None);
    }
}
