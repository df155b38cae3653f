//! Property tests for meld validation and turn atomicity.

use proptest::prelude::*;

use rummikub_engine::core::{Board, Color, Deck, GameState, Meld, PlayerId, Tile, TurnAction, STANDARD_DECK_SIZE};
use rummikub_engine::games::rummikub::RummikubBuilder;
use rummikub_engine::rules::{execute_turn, is_valid_meld, is_valid_run, RulesEngine, StandardRules};

fn tile() -> impl Strategy<Value = Tile> {
    prop_oneof![
        9 => (0..4usize, 1..=13u8).prop_map(|(c, n)| Tile::new(Color::ALL[c], n)),
        1 => Just(Tile::Joker),
    ]
}

fn tiles(max: usize) -> impl Strategy<Value = Vec<Tile>> {
    prop::collection::vec(tile(), 0..max)
}

fn action() -> impl Strategy<Value = TurnAction> {
    prop_oneof![
        1 => Just(TurnAction::Draw),
        3 => tiles(6).prop_map(|t| TurnAction::play_new_set(t)),
        2 => (tiles(3), 0..3usize).prop_map(|(t, i)| TurnAction::add_to_existing_set(t, i)),
        1 => prop::collection::vec(tiles(6).prop_map(Meld::new), 0..4)
            .prop_map(|melds| TurnAction::rearrange_board(melds)),
    ]
}

proptest! {
    #[test]
    fn prop_board_validity_is_stable(melds in prop::collection::vec(tiles(8), 0..5)) {
        let board = Board::from_melds(melds.into_iter().map(Meld::new).collect());
        let copy = board.clone();

        let first = StandardRules.is_valid_board(&board);
        let second = StandardRules.is_valid_board(&board);

        prop_assert_eq!(first, second);
        prop_assert_eq!(board, copy);
    }

    #[test]
    fn prop_meld_order_does_not_matter(mut tiles in tiles(10)) {
        let forward = is_valid_meld(&tiles);
        tiles.reverse();
        prop_assert_eq!(forward, is_valid_meld(&tiles));
    }

    #[test]
    fn prop_consecutive_same_color_is_a_run(c in 0..4usize, start in 1..=11u8, len in 3..=13u8) {
        let end = (start + len - 1).min(13);
        let run: Vec<Tile> = (start..=end).map(|n| Tile::new(Color::ALL[c], n)).collect();
        prop_assert!(is_valid_run(&run));
    }

    #[test]
    fn prop_rejected_turn_changes_nothing(
        seed in any::<u64>(),
        actions in prop::collection::vec(action(), 0..4),
    ) {
        let (game, mut state) = RummikubBuilder::new().players(["Jan", "Pat"]).build(seed);
        game.deal_tiles(&mut state);
        let before = state.clone();

        let result = execute_turn(&StandardRules, &mut state, PlayerId::new(0), &actions);

        match result {
            Ok(_) => {
                prop_assert!(StandardRules.is_valid_board(&state.board));
                prop_assert_eq!(state.current_player(), PlayerId::new(1));
            }
            Err(_) => prop_assert_eq!(&state, &before),
        }
        prop_assert_eq!(state.total_tiles(), STANDARD_DECK_SIZE);
    }

    #[test]
    fn prop_playing_a_held_run_commits(c in 0..4usize, start in 1..=11u8, extra in tile()) {
        let run: Vec<Tile> = (start..start + 3).map(|n| Tile::new(Color::ALL[c], n)).collect();
        let mut state = GameState::new(["Jan", "Pat"], Deck::default());
        for &t in run.iter().chain(std::iter::once(&extra)) {
            state.player_mut(PlayerId::new(0)).receive(t);
        }
        state.player_mut(PlayerId::new(1)).receive(Tile::Joker);

        let result = execute_turn(
            &StandardRules,
            &mut state,
            PlayerId::new(0),
            &[TurnAction::play_new_set(run.clone())],
        );

        prop_assert!(result.is_ok());
        prop_assert_eq!(state.player(PlayerId::new(0)).hand(), &[extra][..]);
        prop_assert_eq!(state.board.melds(), &[Meld::new(run)][..]);
    }
}
