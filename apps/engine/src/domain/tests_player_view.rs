use super::test_state_helpers::{play, stacked_table};
use crate::domain::Action;
use crate::domain::Card::{Baron, Countess, Guard, Handmaid, King, Priest, Prince};
use crate::errors::domain::DomainError;

#[test]
fn fresh_view_shows_only_the_viewers_hand() {
    let state = stacked_table(4, &[Baron, Guard, Priest, Handmaid, King]);
    let view = state.player_view(1).unwrap();

    assert_eq!(view.viewer(), 1);
    assert_eq!(view.hand(), Some(Priest));
    for other in [0, 2, 3] {
        assert_eq!(view.card(other), None);
        assert!(!view.knows(other));
    }
    assert!(view.knows(1));
    assert_eq!(view.deck_size(), 11);
    assert_eq!(view.turn(), 0);
    assert_eq!(view.round_no(), 1);
    assert_eq!(view.scores(), &[0, 0, 0, 0]);
    assert_eq!(view.name(2), "Cy(2)");
    assert!(!view.round_over());
}

#[test]
fn view_is_a_snapshot() {
    let mut state = stacked_table(4, &[Baron, Guard, Priest, Handmaid, King, Guard]);
    let view = state.player_view(2).unwrap();
    let before = view.clone();

    play(&mut state, |me, _| Action::play_guard(me, 1, Some(Priest)).unwrap());

    assert_eq!(view, before);
    assert_eq!(view.deck_size(), 11);
    assert!(!view.eliminated(1));
    assert_eq!(view.turn(), 0);
    assert_eq!(state.deck_size(), 10);
    assert!(state.eliminated(1));
}

#[test]
fn priest_knowledge_shows_in_the_viewers_snapshot_only() {
    let mut state = stacked_table(3, &[Guard, Priest, Guard, King, Guard]);
    play(&mut state, |me, _| Action::play_priest(me, 2).unwrap());

    assert_eq!(state.player_view(0).unwrap().card(2), Some(King));
    assert_eq!(state.player_view(1).unwrap().card(2), None);
    assert_eq!(state.player_view(2).unwrap().card(0), None);
}

#[test]
fn serialized_view_carries_no_hidden_hands() {
    let state = stacked_table(3, &[Guard, Priest, Baron, King]);
    let view = state.player_view(0).unwrap();
    let json = serde_json::to_value(&view).unwrap();

    assert_eq!(json["hands"], serde_json::json!(["Priest", null, null]));
    assert_eq!(json["viewer"], 0);
}

#[test]
fn unaccounted_cards_exclude_discards_and_known_hands() {
    let mut state = stacked_table(4, &[Baron, Guard, Priest, Handmaid, King, Guard]);
    let fresh = state.player_view(0).unwrap();
    let pool = fresh.unaccounted_cards();
    assert_eq!(pool.len(), 15);
    assert_eq!(pool.iter().filter(|&&c| c == Guard).count(), 4);

    play(&mut state, |me, _| Action::play_guard(me, 1, Some(Priest)).unwrap());
    let view = state.player_view(0).unwrap();
    let pool = view.unaccounted_cards();
    // Guard and Priest discarded, Guard in hand.
    assert_eq!(pool.len(), 13);
    assert_eq!(pool.iter().filter(|&&c| c == Guard).count(), 3);
    assert_eq!(pool.iter().filter(|&&c| c == Priest).count(), 1);
    assert!(pool.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn countess_leaves_a_single_legal_play() {
    let mut state = stacked_table(4, &[Guard, Countess, Priest, Baron, Handmaid, Prince]);
    let drawn = state.draw_card().unwrap();
    let view = state.player_view(0).unwrap();

    assert_eq!(
        view.legal_actions(drawn),
        vec![Action::play_countess(0).unwrap()]
    );
}

#[test]
fn guard_offers_every_guess_at_every_open_target() {
    let mut state = stacked_table(4, &[Baron, Guard, Priest, Baron, King, Handmaid]);
    let drawn = state.draw_card().unwrap();
    let view = state.player_view(0).unwrap();
    let actions = view.legal_actions(drawn);

    // Three targets times seven guesses, plus the Handmaid.
    assert_eq!(actions.len(), 22);
    for action in &actions {
        assert!(state.legal_action(action, drawn), "{action}");
    }
}

#[test]
fn shielded_opponent_narrows_the_options() {
    let mut state = stacked_table(2, &[Baron, Handmaid, Prince, Guard, Guard]);
    play(&mut state, |me, _| Action::play_handmaid(me).unwrap());
    let drawn = state.draw_card().unwrap();
    let view = state.player_view(1).unwrap();
    let actions = view.legal_actions(drawn);

    // Guard at the shielded seat is forced; the Prince can only turn inward.
    assert_eq!(actions.len(), 8);
    assert!(actions.contains(&Action::play_prince(1, 1).unwrap()));
    assert!(!actions.contains(&Action::play_prince(1, 0).unwrap()));
}

#[test]
fn no_legal_actions_out_of_turn() {
    let state = stacked_table(3, &[Baron, Guard, Priest, King]);
    let view = state.player_view(1).unwrap();
    assert!(view.legal_actions(Guard).is_empty());
    assert!(!view.is_legal(&Action::play_priest(1, 2).unwrap(), Guard));
}

#[test]
fn view_for_a_missing_seat_is_a_configuration_error() {
    let state = stacked_table(2, &[]);
    assert!(matches!(
        state.player_view(2),
        Err(DomainError::Configuration(_))
    ));
}
