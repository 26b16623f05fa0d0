//! Agents - automated players for a seat.
//!
//! This module provides:
//! - the [`Agent`] trait the orchestrator drives
//! - [`RandomPlayer`]: uniformly random legal play (seedable)
//! - [`BorkedPlayer`]: always submits an illegal play, for fallback tests
//! - [`create_ai`]: construction by type name

mod borked;
pub mod config;
mod random;
mod trait_def;

use std::fmt;
use std::str::FromStr;

pub use borked::BorkedPlayer;
pub use config::AiConfig;
pub use random::RandomPlayer;
pub use trait_def::{Agent, AiError};

use crate::errors::domain::DomainError;

/// How the orchestrator reacts when an agent fails or plays illegally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiFailureMode {
    /// Stop the match with the error (for tests)
    Abort,
    /// Substitute a random legal play and carry on
    #[default]
    FallbackRandom,
}

impl fmt::Display for AiFailureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiFailureMode::Abort => f.write_str("abort"),
            AiFailureMode::FallbackRandom => f.write_str("fallback-random"),
        }
    }
}

impl FromStr for AiFailureMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "abort" => Ok(AiFailureMode::Abort),
            "fallback-random" | "fallback" | "random" => Ok(AiFailureMode::FallbackRandom),
            other => Err(DomainError::config(format!(
                "Unknown AI failure mode '{other}' (expected 'abort' or 'fallback-random')"
            ))),
        }
    }
}

/// Create an agent from its type name.
///
/// Supports `"random"` (seeded from `config.seed`) and `"borked"`.
/// Returns `None` for unknown names.
pub fn create_ai(ai_type: &str, config: &AiConfig) -> Option<Box<dyn Agent>> {
    match ai_type {
        "random" => Some(Box::new(RandomPlayer::new(config.seed()))),
        "borked" => Some(Box::new(BorkedPlayer::new())),
        _ => None,
    }
}
