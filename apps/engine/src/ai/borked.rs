//! Faulty agent for exercising the orchestrator's failure handling.

use super::trait_def::{Agent, AiError};
use crate::domain::{Action, Card, PlayerView};

/// Always plays an untargeted card it holds neither in hand nor from the
/// draw, so every submission is rejected with `CardNotHeld`.
#[derive(Debug, Default)]
pub struct BorkedPlayer {
    view: Option<PlayerView>,
}

impl BorkedPlayer {
    pub const NAME: &'static str = "BorkedPlayer";

    pub fn new() -> Self {
        Self::default()
    }
}

impl Agent for BorkedPlayer {
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
            .as_ref()
            .ok_or_else(|| AiError::Internal("No view received before play".into()))?;
        let held = view.hand();
        let card = [Card::Handmaid, Card::Countess, Card::Princess]
            .into_iter()
            .find(|&c| Some(c) != held && c != drawn)
            .ok_or_else(|| AiError::Internal("Holds every card it could fake".into()))?;
        Action::for_card(card, view.viewer(), None, None)
            .map_err(|e| AiError::Internal(e.to_string()))
    }
}
