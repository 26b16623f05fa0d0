#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod ai;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;


// Re-exports for public API
pub use ai::{create_ai, Agent, AiConfig, AiError, AiFailureMode, BorkedPlayer, RandomPlayer};
pub use config::match_config::MatchConfig;
pub use domain::{Action, Card, Deck, GameState, PlayerId, PlayerView};
pub use errors::domain::{ActionViolation, DomainError};
pub use services::game_flow::{GameFlow, MatchResult, RoundSummary};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
