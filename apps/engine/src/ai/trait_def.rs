//! Agent trait definition.

use std::fmt;

use crate::domain::{Action, Card, PlayerView};
use crate::errors::domain::{ActionViolation, DomainError};

/// Errors an agent can report instead of an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiError {
    /// Agent failed to decide in time
    Timeout,
    /// Agent hit an internal problem (missing view, exhausted options)
    Internal(String),
    /// Agent could not produce a legal move
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Timeout => write!(f, "AI decision timeout"),
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

impl From<AiError> for DomainError {
    fn from(err: AiError) -> Self {
        DomainError::invalid_action(ActionViolation::NoAction, err.to_string())
    }
}

/// A seat at the table.
///
/// The orchestrator hands each agent a fresh [`PlayerView`] when a round is
/// dealt and after every resolved play; the agent keeps whatever it needs
/// from them. When it is the agent's turn, `play_card` receives the card it
/// just drew and must answer with an action for its own seat. Agents should
/// pick from [`PlayerView::legal_actions`]; anything illegal is replaced or
/// aborts the match depending on the orchestrator's failure mode.
pub trait Agent: Send {
    fn name(&self) -> &str;

    /// A new round was dealt; `view` is this seat's starting snapshot.
    fn new_round(&mut self, view: &PlayerView);

    /// `action` was just resolved; `view` reflects its outcome.
    fn see(&mut self, action: &Action, view: &PlayerView);

    /// Choose a play holding the current hand plus `drawn`.
    fn play_card(&mut self, drawn: Card) -> Result<Action, AiError>;
}
