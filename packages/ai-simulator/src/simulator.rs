//! In-memory match runner.
//!
//! Builds one agent per seat from the requested types, each seeded from the
//! game seed, and lets the engine's orchestrator play the match out.

use std::fmt;

use loveletter::domain::derive_agent_seed;
use loveletter::{
    create_ai, Agent, AiConfig, AiFailureMode, DomainError, GameFlow, MatchConfig, MatchResult,
    PlayerId,
};

use crate::types::AiType;

pub struct GameResult {
    pub game_seed: u64,
    pub ai_types: Vec<AiType>,
    pub outcome: MatchResult,
}

pub struct Simulator {
    game_seed: u64,
    failure_mode: AiFailureMode,
    max_rounds: Option<u32>,
}

impl Simulator {
    pub fn new(game_seed: u64, failure_mode: AiFailureMode, max_rounds: Option<u32>) -> Self {
        Self {
            game_seed,
            failure_mode,
            max_rounds,
        }
    }

    pub fn simulate_game(&self, seats: &[AiType]) -> Result<GameResult, SimulatorError> {
        let agents = seats
            .iter()
            .enumerate()
            .map(|(seat, &ai_type)| self.create_agent(seat as PlayerId, ai_type))
            .collect::<Result<Vec<_>, _>>()?;

        let mut config = MatchConfig::default()
            .with_seed(self.game_seed)
            .with_failure_mode(self.failure_mode);
        if let Some(rounds) = self.max_rounds {
            config = config.with_max_rounds(rounds);
        }

        let outcome = GameFlow::new(agents, config)?.play_match()?;
        Ok(GameResult {
            game_seed: self.game_seed,
            ai_types: seats.to_vec(),
            outcome,
        })
    }

    fn create_agent(
        &self,
        seat: PlayerId,
        ai_type: AiType,
    ) -> Result<Box<dyn Agent>, SimulatorError> {
        let config = AiConfig::with_seed(derive_agent_seed(self.game_seed, seat));
        create_ai(ai_type.factory_name(), &config)
            .ok_or(SimulatorError::UnknownAi(ai_type.factory_name()))
    }
}

#[derive(Debug)]
pub enum SimulatorError {
    UnknownAi(&'static str),
    Domain(DomainError),
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::UnknownAi(name) => write!(f, "Unknown AI type: {name}"),
            SimulatorError::Domain(err) => write!(f, "Domain error [{}]: {err}", err.code()),
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<DomainError> for SimulatorError {
    fn from(err: DomainError) -> Self {
        SimulatorError::Domain(err)
    }
}
