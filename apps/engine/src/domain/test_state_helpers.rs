// Test-only helpers for building tables with a known deal.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::domain::state::{GameState, PlayerId};
use crate::domain::{Action, Card, Deck};

/// Full deck order: Princess burned, Guard to seat 0, Baron to seat 1,
/// and a Prince as the very last card to draw.
pub const LAST_CARD_IS_A_PRINCE: [Card; 16] = [
    Card::Princess,
    Card::Guard,
    Card::Baron,
    Card::Guard,
    Card::Guard,
    Card::Guard,
    Card::Guard,
    Card::Priest,
    Card::Priest,
    Card::Baron,
    Card::Handmaid,
    Card::Handmaid,
    Card::Prince,
    Card::King,
    Card::Countess,
    Card::Prince,
];

pub fn names(n: usize) -> Vec<String> {
    ["Ann", "Bo", "Cy", "Di"][..n]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Table of `n` seats dealt from a deck starting with `prefix`
/// (burned card, one card per seat, then the draw order).
pub fn stacked_table(n: usize, prefix: &[Card]) -> GameState {
    let deck = Deck::stacked(prefix).expect("valid stacked deck");
    GameState::from_deck(names(n), deck, ChaCha8Rng::seed_from_u64(0)).expect("valid table")
}

/// Draw for the turn owner and resolve `build(turn_owner, drawn)`.
pub fn play(state: &mut GameState, build: impl FnOnce(PlayerId, Card) -> Action) -> String {
    let drawn = state.draw_card().expect("card to draw");
    let action = build(state.turn(), drawn);
    state.update(&action, drawn).expect("legal play")
}

/// Throw away undrawn cards from the top until only `left` remain.
pub fn run_deck_down(state: &mut GameState, left: usize) {
    while state.round.deck.remaining() > left {
        let _ = state.round.deck.draw();
    }
}

/// Snapshot of every mutable engine fact, for "nothing changed" checks.
pub fn fingerprint(state: &GameState) -> (crate::domain::RoundState, Vec<u8>) {
    (state.round().clone(), state.scores().to_vec())
}
