use tracing::warn;

use super::GameFlow;
use crate::ai::AiFailureMode;
use crate::domain::{Action, Card, PlayerId};
use crate::errors::domain::DomainError;

impl<R> GameFlow<R> {
    /// Ask `seat`'s agent for a play and vet it against the engine.
    ///
    /// A rejected play is either replaced by the fallback agent's choice
    /// (second value `true`) or returned as the error, per failure mode.
    pub(super) fn request_action(
        &mut self,
        seat: PlayerId,
        drawn: Card,
    ) -> Result<(Action, bool), DomainError> {
        let agent = &mut self.agents[seat as usize];
        let proposed = agent
            .play_card(drawn)
            .map_err(DomainError::from)
            .and_then(|action| self.state.check_action(&action, drawn).map(|()| action));

        let err = match proposed {
            Ok(action) => return Ok((action, false)),
            Err(err) => err,
        };
        warn!(
            seat,
            agent = agent.name(),
            code = err.code(),
            error = %err,
            "Agent play rejected"
        );

        match self.config.failure_mode {
            AiFailureMode::Abort => Err(err),
            AiFailureMode::FallbackRandom => {
                let view = self.state.player_view(seat)?;
                let action = self.fallback.choose(&view, drawn)?;
                Ok((action, true))
            }
        }
    }
}
