//! Rummikub game facade.

use tracing::{debug, info};

use crate::core::{Deck, GameConfig, GameRng, GameState, PlayerId, TurnAction};
use crate::error::TurnResult;
use crate::rules::{execute_turn, GameResult, RulesEngine, StandardRules, TurnOutcome};

/// A configured game: the rules plus the table settings.
///
/// Holds no mutable state; every operation takes the `GameState` it works on.
#[derive(Clone, Debug)]
pub struct Rummikub<R: RulesEngine = StandardRules> {
    config: GameConfig,
    rules: R,
}

/// Builder for creating a Rummikub game.
#[derive(Clone, Debug)]
pub struct RummikubBuilder {
    names: Vec<String>,
    config: GameConfig,
    deck: Option<Deck>,
}

impl Default for RummikubBuilder {
    fn default() -> Self {
        Self {
            names: vec!["Player 1".to_string(), "Player 2".to_string()],
            config: GameConfig::default(),
            deck: None,
        }
    }
}

impl RummikubBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat players in turn order.
    pub fn players<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `deck` as-is instead of building a shuffled one.
    pub fn stacked_deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Build the game and initial state with standard rules.
    ///
    /// Hands start empty; call [`Rummikub::deal_tiles`] to deal.
    pub fn build(self, seed: u64) -> (Rummikub, GameState) {
        self.build_with_rules(StandardRules, seed)
    }

    /// Build with a custom rules engine.
    pub fn build_with_rules<R: RulesEngine>(self, rules: R, seed: u64) -> (Rummikub<R>, GameState) {
        let deck = match self.deck {
            Some(deck) => deck,
            None => {
                let mut rng = GameRng::new(seed).for_context("deck");
                Deck::with_counts(self.config.tile_copies, self.config.joker_count, &mut rng)
            }
        };

        let state = GameState::new(self.names, deck);
        let game = Rummikub {
            config: self.config,
            rules,
        };

        (game, state)
    }
}

impl<R: RulesEngine> Rummikub<R> {
    /// Get the table settings.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Get the rules engine.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Deal `starting_hand_size` tiles to every player, one at a time in
    /// seat order. Stops early if the deck runs out.
    pub fn deal_tiles(&self, state: &mut GameState) {
        'deal: for _ in 0..self.config.starting_hand_size {
            for player in PlayerId::all(state.player_count()) {
                if state.draw_for(player).is_none() {
                    break 'deal;
                }
            }
        }
        debug!(
            players = state.player_count(),
            deck_remaining = state.deck.len(),
            "tiles dealt"
        );
    }

    /// Execute one turn for `player`. See [`execute_turn`].
    pub fn play_turn(
        &self,
        state: &mut GameState,
        player: PlayerId,
        actions: &[TurnAction],
    ) -> TurnResult<TurnOutcome> {
        let outcome = execute_turn(&self.rules, state, player, actions)?;
        if let Some(GameResult::Winner(winner)) = self.result(state) {
            info!(winner = %state.player(winner).name, turn = state.turn_number(), "game over");
        }
        Ok(outcome)
    }

    /// Check if some player has emptied their hand.
    ///
    /// True before the deal, since every hand is empty then.
    #[must_use]
    pub fn is_game_over(&self, state: &GameState) -> bool {
        self.rules.is_terminal(state).is_some()
    }

    /// The winner, if the game is over.
    #[must_use]
    pub fn result(&self, state: &GameState) -> Option<GameResult> {
        self.rules.is_terminal(state)
    }

    /// Check every meld on the board.
    #[must_use]
    pub fn is_valid_board(&self, state: &GameState) -> bool {
        self.rules.is_valid_board(&state.board)
    }

    /// Play until someone wins or `max_turns` turns have been taken.
    ///
    /// Deals first if nobody holds any tiles. `policy` chooses the current
    /// player's actions; a rejected turn is replaced by a draw.
    pub fn play_game<F>(&self, state: &mut GameState, mut policy: F) -> GameResult
    where
        F: FnMut(&GameState, PlayerId) -> Vec<TurnAction>,
    {
        if state.players().values().all(|p| p.hand_size() == 0) {
            self.deal_tiles(state);
        }

        let max_turns = self.config.max_turns;
        let mut turns = 0u32;
        loop {
            if let Some(result) = self.result(state) {
                return result;
            }
            if max_turns != 0 && turns >= max_turns {
                info!(turns, "turn cap reached");
                return GameResult::Stalemate;
            }

            let player = state.current_player();
            let actions = policy(&*state, player);
            if let Err(error) = self.play_turn(state, player, &actions) {
                debug!(player = %state.player(player).name, %error, "drawing instead");
                if self.play_turn(state, player, &[TurnAction::Draw]).is_err() {
                    return GameResult::Stalemate;
                }
            }
            turns += 1;
        }
    }
}
