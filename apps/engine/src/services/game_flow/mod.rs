//! Match orchestration - drives agents through rounds against the engine.
//!
//! The engine only validates and resolves plays. [`GameFlow`] owns the loop
//! around it: dealing views to every seat, drawing for the turn owner,
//! asking its agent for a play, handling rejected plays according to the
//! configured [`AiFailureMode`](crate::ai::AiFailureMode), and broadcasting
//! each resolved play with fresh views.

mod ai_coordinator;
mod round_lifecycle;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use crate::ai::{Agent, RandomPlayer};
use crate::config::match_config::MatchConfig;
use crate::domain::rules::MAX_PLAYERS;
use crate::domain::{derive_agent_seed, GameState, PlayerId};
use crate::errors::domain::DomainError;

/// What happened in one finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub round_no: u32,
    pub winner: Option<PlayerId>,
    /// Plays resolved, substituted ones included.
    pub turns: u32,
    /// Plays the fallback agent made in place of a seat's agent.
    pub substitutions: u32,
    /// Seats knocked out, in seat order.
    pub eliminations: Vec<PlayerId>,
}

/// Outcome of a whole match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub final_scores: Vec<u8>,
    /// `None` when the match stopped at the round cap first.
    pub winner: Option<PlayerId>,
    pub rounds: Vec<RoundSummary>,
}

impl MatchResult {
    pub fn total_substitutions(&self) -> u32 {
        self.rounds.iter().map(|r| r.substitutions).sum()
    }

    pub fn total_turns(&self) -> u32 {
        self.rounds.iter().map(|r| r.turns).sum()
    }

    /// Rounds won per seat.
    pub fn round_wins(&self, player: PlayerId) -> usize {
        self.rounds
            .iter()
            .filter(|r| r.winner == Some(player))
            .count()
    }
}

pub struct GameFlow<R = ChaCha8Rng> {
    state: GameState<R>,
    agents: Vec<Box<dyn Agent>>,
    config: MatchConfig,
    fallback: RandomPlayer,
}

impl GameFlow<ChaCha8Rng> {
    /// Seat `agents` in order, named after their agent type, and deal the
    /// first round with `config.seed` (OS entropy when unset).
    pub fn new(agents: Vec<Box<dyn Agent>>, config: MatchConfig) -> Result<Self, DomainError> {
        let names = agents.iter().map(|a| a.name().to_string()).collect();
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let state = GameState::new(names, rng)?;
        Self::with_state(state, agents, config)
    }
}

impl<R> GameFlow<R> {
    /// Drive an already seated table, one agent per seat.
    pub fn with_state(
        state: GameState<R>,
        agents: Vec<Box<dyn Agent>>,
        config: MatchConfig,
    ) -> Result<Self, DomainError> {
        if agents.len() != state.num_players() {
            return Err(DomainError::config(format!(
                "{} agents for {} seats",
                agents.len(),
                state.num_players()
            )));
        }
        let fallback_seed = config
            .seed
            .map(|seed| derive_agent_seed(seed, MAX_PLAYERS as PlayerId));
        Ok(Self {
            state,
            agents,
            config,
            fallback: RandomPlayer::new(fallback_seed),
        })
    }

    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }
}

impl<R: Rng> GameFlow<R> {
    /// Play rounds until someone reaches the threshold or the round cap hits.
    ///
    /// The round in progress when called is played first.
    pub fn play_match(&mut self) -> Result<MatchResult, DomainError> {
        info!(
            players = self.state.num_players(),
            threshold = self.state.win_threshold(),
            failure_mode = %self.config.failure_mode,
            "Match started"
        );
        let mut rounds = Vec::new();
        loop {
            rounds.push(self.play_round()?);
            let capped = self
                .config
                .max_rounds
                .is_some_and(|cap| rounds.len() >= cap as usize);
            if self.state.game_over() || capped {
                break;
            }
            self.state.new_round();
        }

        let result = MatchResult {
            final_scores: self.state.scores().to_vec(),
            winner: self.state.game_winner(),
            rounds,
        };
        info!(
            winner = ?result.winner,
            rounds = result.rounds.len(),
            scores = ?result.final_scores,
            "Match finished"
        );
        Ok(result)
    }
}
