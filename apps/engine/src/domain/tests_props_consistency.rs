// Property tests: random legal playouts keep the table consistent.

use proptest::prelude::*;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::test_gens;
use super::test_state_helpers::names;
use crate::domain::rules::DECK_SIZE;
use crate::domain::{Deck, GameState, PlayerId};

const MAX_ROUNDS: u32 = 40;

/// Facts that hold between any two plays.
fn check_table(state: &GameState) -> Result<(), TestCaseError> {
    let n = state.num_players() as PlayerId;
    prop_assert_eq!(state.round().card_count(), DECK_SIZE);
    for p in 0..n {
        prop_assert!(state.knows(p, p), "seat {} forgot its own card", p);
        if state.eliminated(p) {
            prop_assert!(!state.protected(p));
            for q in 0..n {
                prop_assert!(state.knows(q, p));
            }
        }
    }
    if !state.round_over() {
        prop_assert!(!state.eliminated(state.turn()));
        prop_assert!(state.round().remaining_players() >= 2);
        prop_assert!(state.deck_size() >= 1);
    }
    Ok(())
}

proptest! {
    #![proptest_config(test_gens::proptest_config())]

    #[test]
    fn random_matches_stay_consistent(n in test_gens::player_count(), seed in test_gens::seed()) {
        let mut state = GameState::seeded(names(n), seed).unwrap();
        let mut chooser = ChaCha8Rng::seed_from_u64(seed ^ 0x5eed);
        let mut rounds_done = 0u32;

        while !state.game_over() && rounds_done < MAX_ROUNDS {
            check_table(&state)?;
            while !state.round_over() {
                let turn = state.turn();
                let drawn = state.draw_card().unwrap();
                let view = state.player_view(turn).unwrap();
                let options = view.legal_actions(drawn);
                prop_assert!(!options.is_empty(), "no legal play for seat {}", turn);

                // The viewer's rules agree with the engine's.
                for action in &options {
                    prop_assert!(state.legal_action(action, drawn));
                }
                let idle = (turn as usize + 1) % n;
                prop_assert!(state.player_view(idle as PlayerId).unwrap().legal_actions(drawn).is_empty());

                let action = *options.choose(&mut chooser).unwrap();
                state.update(&action, drawn).unwrap();
                check_table(&state)?;
            }

            rounds_done += 1;
            if state.round().remaining_players() > 1 {
                prop_assert_eq!(state.deck_size(), 0, "round ended with cards left to draw");
            }
            let winner = state.round_winner().unwrap();
            prop_assert_eq!(state.turn(), winner);
            for p in 0..n as PlayerId {
                for q in 0..n as PlayerId {
                    prop_assert!(state.knows(p, q));
                }
            }
            let total: u32 = state.scores().iter().map(|&s| u32::from(s)).sum();
            prop_assert_eq!(total, rounds_done);

            if !state.game_over() {
                state.new_round();
                prop_assert_eq!(state.round_no(), rounds_done + 1);
            }
        }

        if state.game_over() {
            let winner = state.game_winner().unwrap();
            prop_assert!(state.score(winner) >= state.win_threshold());
        }
    }

    #[test]
    fn same_seed_deals_the_same_match(n in test_gens::player_count(), seed in test_gens::seed()) {
        let a = GameState::seeded(names(n), seed).unwrap();
        let b = GameState::seeded(names(n), seed).unwrap();
        prop_assert_eq!(a.round(), b.round());
    }

    #[test]
    fn unseen_cards_balance_the_discards(n in test_gens::player_count(), seed in test_gens::seed()) {
        let state = GameState::seeded(names(n), seed).unwrap();
        // Nothing is discarded yet: the whole deck, burned card included, is unseen.
        prop_assert_eq!(state.unseen_cards().len(), DECK_SIZE);
    }

    #[test]
    fn burned_card_stays_out_of_play(burned in test_gens::card(), n in test_gens::player_count()) {
        let deck = Deck::stacked(&[burned]).unwrap();
        let state = GameState::from_deck(names(n), deck, ChaCha8Rng::seed_from_u64(1)).unwrap();
        let copies = burned.count();
        let round = state.round();
        let reachable = (0..n as PlayerId)
            .filter_map(|p| round.hand(p))
            .chain(round.deck.undrawn().iter().copied())
            .filter(|&c| c == burned)
            .count();
        prop_assert_eq!(reachable, copies - 1);
        let unseen = state.unseen_cards().iter().filter(|&&c| c == burned).count();
        prop_assert_eq!(unseen, copies);
        prop_assert_eq!(state.round().card_count(), DECK_SIZE);
    }
}
