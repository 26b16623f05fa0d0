//! Domain-level error type used by the engine, agents and the match orchestrator.
//!
//! Only three kinds exist. `InvalidAction` is always recoverable: the engine
//! leaves its state untouched, so the caller may resubmit a different action.
//! `Configuration` and `OperationNotPermitted` signal caller mistakes.

use thiserror::Error;

/// Which rule an action broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ActionViolation {
    /// Acting or targeted seat does not exist at this table.
    PlayerOutOfRange,
    /// A targeted card was played without a target.
    TargetRequired,
    /// A card with no target was given one.
    TargetForbidden,
    /// A card that may not target its own player did.
    SelfTarget,
    /// Guard played without a guess.
    GuessRequired,
    /// A guess was attached to a card other than the Guard.
    GuessForbidden,
    /// Guessing the Guard itself.
    GuardGuess,
    /// The actor holds neither a card of this kind nor drew one.
    CardNotHeld,
    /// The actor is not the turn owner.
    OutOfTurn,
    /// King or Prince played while holding the Countess.
    CountessRequired,
    /// The target is already out of the round.
    TargetEliminated,
    /// The target is shielded by the Handmaid and another target exists.
    TargetProtected,
    /// The agent produced nothing usable.
    NoAction,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid action ({kind:?}): {detail}")]
    InvalidAction {
        kind: ActionViolation,
        detail: String,
    },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("operation not permitted: {0}")]
    OperationNotPermitted(String),
}

impl DomainError {
    pub fn invalid_action(kind: ActionViolation, detail: impl Into<String>) -> Self {
        Self::InvalidAction {
            kind,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Configuration(detail.into())
    }

    pub fn not_permitted(detail: impl Into<String>) -> Self {
        Self::OperationNotPermitted(detail.into())
    }

    /// Stable machine-readable code, used in logs and simulation metrics.
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::InvalidAction { .. } => "INVALID_ACTION",
            DomainError::Configuration(_) => "CONFIGURATION",
            DomainError::OperationNotPermitted(_) => "OPERATION_NOT_PERMITTED",
        }
    }

    pub fn is_invalid_action(&self) -> bool {
        matches!(self, DomainError::InvalidAction { .. })
    }

    /// The broken rule, for `InvalidAction` errors.
    pub fn violation(&self) -> Option<ActionViolation> {
        match self {
            DomainError::InvalidAction { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
