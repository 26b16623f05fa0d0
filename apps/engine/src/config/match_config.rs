use std::env;

use crate::ai::AiFailureMode;
use crate::errors::domain::DomainError;

pub const SEED_VAR: &str = "LOVELETTER_SEED";
pub const AI_FAILURE_VAR: &str = "LOVELETTER_AI_FAILURE";
pub const MAX_ROUNDS_VAR: &str = "LOVELETTER_MAX_ROUNDS";

/// Settings for one orchestrated match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchConfig {
    /// Shuffle seed; `None` seeds from the OS.
    pub seed: Option<u64>,
    pub failure_mode: AiFailureMode,
    /// Stop after this many rounds even without a match winner.
    pub max_rounds: Option<u32>,
}

impl MatchConfig {
    /// Read `LOVELETTER_SEED`, `LOVELETTER_AI_FAILURE` and
    /// `LOVELETTER_MAX_ROUNDS`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let mut config = Self::default();
        if let Some(raw) = lookup(SEED_VAR) {
            config.seed = Some(parse_seed(&raw)?);
        }
        if let Some(raw) = lookup(AI_FAILURE_VAR) {
            config.failure_mode = raw.parse()?;
        }
        if let Some(raw) = lookup(MAX_ROUNDS_VAR) {
            let rounds: u32 = raw.trim().parse().map_err(|_| {
                DomainError::config(format!("{MAX_ROUNDS_VAR} must be a positive integer, got '{raw}'"))
            })?;
            if rounds == 0 {
                return Err(DomainError::config(format!("{MAX_ROUNDS_VAR} must be at least 1")));
            }
            config.max_rounds = Some(rounds);
        }
        Ok(config)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_failure_mode(mut self, mode: AiFailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    pub fn with_max_rounds(mut self, rounds: u32) -> Self {
        self.max_rounds = Some(rounds);
        self
    }
}

/// Decimal, or hexadecimal with a `0x` prefix.
pub fn parse_seed(raw: &str) -> Result<u64, DomainError> {
    let trimmed = raw.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse(),
    };
    parsed.map_err(|_| DomainError::config(format!("{SEED_VAR} is not a valid seed: '{raw}'")))
}
