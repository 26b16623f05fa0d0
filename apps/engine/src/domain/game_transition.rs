//! Applying a play to the engine state.

use tracing::{debug, info};

use crate::domain::effects;
use crate::domain::legality;
use crate::domain::state::GameState;
use crate::domain::{Action, Card};
use crate::errors::domain::DomainError;

impl<R> GameState<R> {
    /// Resolve `action` for the turn owner, who drew `drawn` this turn.
    ///
    /// Either applies the whole play and returns its description, or fails
    /// with the state exactly as it was.
    pub fn update(&mut self, action: &Action, drawn: Card) -> Result<String, DomainError> {
        if self.round.is_settled() {
            return Err(DomainError::not_permitted(
                "The round is over; deal a new round first",
            ));
        }
        legality::check_action(&self.round, action, drawn)?;

        let actor = action.player();
        let a = actor as usize;
        let card = action.card();

        self.round.discards[a].push(card);
        if self.round.hands[a] == Some(card) {
            self.round.hands[a] = Some(drawn);
            self.round.forget(actor);
        }
        self.round.protected[a] = false;

        let target_name = action
            .target()
            .map(|t| self.display_name(t))
            .unwrap_or_default();
        let mut description = action.describe(&self.display_name(actor), &target_name);
        description.push_str(&effects::resolve(&mut self.round, action, &self.names));

        if self.round.is_over() {
            self.round.settled = true;
            self.round.reveal_all();
            if let Some(winner) = self.round_winner() {
                self.award_round(winner);
                self.round.turn = winner;
                description.push_str(&format!("\nPlayer {winner} wins the round."));
                info!(
                    round_no = self.round_no(),
                    winner,
                    score = self.score(winner),
                    "Round won"
                );
            }
        } else {
            self.round.advance_turn();
        }

        debug!(actor, card = %card, next = self.round.turn, "Resolved play");
        Ok(description)
    }
}
