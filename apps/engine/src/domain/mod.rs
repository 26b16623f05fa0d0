//! Domain layer: pure game logic types and helpers.

pub mod action;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
mod effects;
pub mod game_transition;
mod legality;
pub mod player_view;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;

#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_player_view;
#[cfg(test)]
mod tests_props_consistency;
#[cfg(test)]
mod tests_scoring;

// Re-exports for ergonomics
pub use action::Action;
pub use cards_parsing::try_parse_cards;
pub use cards_types::Card;
pub use dealing::{shuffled_deck, standard_deck, Deck};
pub use player_view::PlayerView;
pub use rules::{win_threshold, MAX_PLAYERS, MIN_PLAYERS};
pub use seed_derivation::{derive_agent_seed, derive_game_seed};
pub use state::{next_seat, GameState, PlayerId, RoundState};
