//! Random agent - plays a uniformly chosen legal action.
//!
//! [`RandomPlayer`] is the reference [`Agent`](super::Agent): it never reads
//! past what its own [`PlayerView`] shows, asks the view for the legal
//! actions and picks one. Seeded instances are fully reproducible, which the
//! orchestrator relies on when it substitutes a play for a faulty agent.

use rand::prelude::*;
use tracing::trace;

use super::trait_def::{Agent, AiError};
use crate::domain::{Action, Card, PlayerView};

pub struct RandomPlayer {
    rng: StdRng,
    view: Option<PlayerView>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    /// `Some(seed)` for reproducible play, `None` to seed from the OS.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        Self { rng, view: None }
    }

    /// Pick uniformly among `view`'s legal actions for `drawn`.
    pub fn choose(&mut self, view: &PlayerView, drawn: Card) -> Result<Action, AiError> {
        let legal = view.legal_actions(drawn);
        if legal.is_empty() {
            return Err(AiError::InvalidMove("No legal actions available".into()));
        }
        let choice = legal
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| AiError::Internal("Failed to choose random action".into()))?;
        trace!(seat = view.viewer(), options = legal.len(), action = %choice, "Random choice");
        Ok(choice)
    }
}

impl Agent for RandomPlayer {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn new_round(&mut self, view: &PlayerView) {
        self.view = Some(view.clone());
    }

    fn see(&mut self, _action: &Action, view: &PlayerView) {
        self.view = Some(view.clone());
    }

    fn play_card(&mut self, drawn: Card) -> Result<Action, AiError> {
        let view = self
            .view
            .take()
            .ok_or_else(|| AiError::Internal("No view received before play".into()))?;
        let choice = self.choose(&view, drawn);
        self.view = Some(view);
        choice
    }
}
