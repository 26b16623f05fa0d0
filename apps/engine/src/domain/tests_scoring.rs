use super::scoring::{discard_value, game_winner, round_winner};
use super::test_state_helpers::{play, stacked_table};
use crate::domain::Card::{Baron, Countess, Guard, Handmaid, King, Priest, Prince, Princess};
use crate::domain::{Action, Card, RoundState};

/// A round of `hands.len()` seats with the given hands and discards, and the
/// deck run down so the round counts as finished.
fn finished_round(hands: &[Option<Card>], discards: &[&[Card]]) -> RoundState {
    let state = stacked_table(hands.len(), &[]);
    let mut round = state.round().clone();
    round.hands = hands.to_vec();
    round.discards = discards.iter().map(|pile| pile.to_vec()).collect();
    while round.deck.remaining() > 0 {
        let _ = round.deck.draw();
    }
    round
}

#[test]
fn highest_card_wins_the_round() {
    let round = finished_round(&[Some(Priest), Some(King), Some(Baron)], &[&[], &[], &[]]);
    assert_eq!(round_winner(&round), Some(1));
}

#[test]
fn equal_cards_fall_back_to_discard_totals() {
    let round = finished_round(&[Some(Baron), Some(Baron)], &[&[Guard], &[Priest]]);
    assert_eq!(discard_value(&round, 0), 1);
    assert_eq!(discard_value(&round, 1), 2);
    assert_eq!(round_winner(&round), Some(1));
}

#[test]
fn full_tie_goes_to_the_lowest_seat() {
    let round = finished_round(
        &[Some(Baron), Some(Guard), Some(Baron)],
        &[&[Priest], &[], &[Priest]],
    );
    assert_eq!(round_winner(&round), Some(0));
}

#[test]
fn eliminated_seats_cannot_win() {
    let round = finished_round(&[None, Some(Guard), Some(Guard)], &[&[Princess], &[], &[]]);
    assert_eq!(round_winner(&round), Some(1));
}

#[test]
fn running_round_has_no_winner() {
    let state = stacked_table(3, &[]);
    assert!(!state.round_over());
    assert_eq!(round_winner(state.round()), None);
    assert_eq!(state.round_winner(), None);
}

#[test]
fn match_thresholds_depend_on_table_size() {
    assert_eq!(game_winner(&[7, 6]), Some(0));
    assert_eq!(game_winner(&[6, 6]), None);
    assert_eq!(game_winner(&[0, 5, 4]), Some(1));
    assert_eq!(game_winner(&[4, 4, 0]), None);
    assert_eq!(game_winner(&[3, 3, 0, 4]), Some(3));
    assert_eq!(game_winner(&[3, 3, 3, 3]), None);
    assert_eq!(game_winner(&[9]), None);
}

#[test]
fn last_player_standing_takes_the_round() {
    let mut state = stacked_table(2, &[Baron, Guard, Priest, Guard]);
    let text = play(&mut state, |me, _| Action::play_guard(me, 1, Some(Priest)).unwrap());

    assert!(text.ends_with("\nPlayer 0 wins the round."));
    assert!(state.round_over());
    assert_eq!(state.round_winner(), Some(0));
    assert_eq!(state.scores(), &[1, 0]);
    assert_eq!(state.turn(), 0);
    assert!(!state.game_over());
}

#[test]
fn finished_round_reveals_every_hand() {
    let mut state = stacked_table(3, &[Guard, Guard, Priest, King, Guard, Baron]);
    play(&mut state, |me, _| Action::play_guard(me, 1, Some(Priest)).unwrap());
    assert!(!state.knows(0, 2));
    play(&mut state, |me, _| Action::play_baron(me, 0).unwrap());
    assert!(state.eliminated(0));
    assert!(state.round_over());
    assert_eq!(state.round_winner(), Some(2));

    let view = state.player_view(1).unwrap();
    assert_eq!(view.card(2), Some(King));
    for observer in 0..3 {
        for subject in 0..3 {
            assert!(state.knows(observer, subject));
        }
    }
}

#[test]
fn deck_exhaustion_goes_to_the_highest_discards() {
    // Both seats hold a Prince throughout; every drawn card is played
    // straight back without changing either hand.
    let mut state = stacked_table(
        2,
        &[
            Princess, Prince, Prince, Guard, Priest, Baron, Handmaid, Guard, King, Guard,
            Countess, Priest, Baron, Handmaid, Guard, Guard,
        ],
    );

    let mut text = String::new();
    while !state.round_over() {
        text = play(&mut state, |me, drawn| {
            let other = 1 - me;
            let target = drawn.takes_target().then_some(other);
            let guess = (drawn == Guard).then_some(Princess);
            Action::for_card(drawn, me, target, guess).unwrap()
        });
    }

    assert_eq!(state.deck_size(), 0);
    assert_eq!(state.discards(0).count() + state.discards(1).count(), 13);
    assert_eq!(state.card(0), Some(Prince));
    assert_eq!(state.card(1), Some(Prince));
    assert_eq!(discard_value(state.round(), 0), 13);
    assert_eq!(discard_value(state.round(), 1), 23);
    assert_eq!(state.round_winner(), Some(1));
    assert!(text.ends_with("\nPlayer 1 wins the round."));
    assert_eq!(state.scores(), &[0, 1]);
}

#[test]
fn reaching_the_threshold_ends_the_match() {
    let mut state = stacked_table(2, &[Baron, Guard, Priest, Guard]);
    state.set_scores(&[6, 0]);
    assert!(!state.game_over());

    play(&mut state, |me, _| Action::play_guard(me, 1, Some(Priest)).unwrap());
    assert_eq!(state.score(0), 7);
    assert!(state.game_over());
    assert_eq!(state.game_winner(), Some(0));
    assert_eq!(state.win_threshold(), 7);
}

#[test]
fn new_round_keeps_scores_and_resets_the_table() {
    let mut state = stacked_table(2, &[Baron, Guard, Priest, Guard]);
    play(&mut state, |me, _| Action::play_guard(me, 1, Some(Priest)).unwrap());

    state.new_round();
    assert_eq!(state.round_no(), 2);
    assert_eq!(state.scores(), &[1, 0]);
    assert!(!state.round_over());
    assert!(!state.eliminated(1));
    assert_eq!(state.turn(), 0);
    assert_eq!(state.deck_size(), 13);
    assert_eq!(state.round().card_count(), 16);
}
