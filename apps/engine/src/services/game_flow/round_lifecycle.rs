use tracing::{debug, info};

use super::{GameFlow, RoundSummary};
use crate::domain::PlayerId;
use crate::errors::domain::DomainError;

impl<R> GameFlow<R> {
    /// Play the current round to its end.
    pub fn play_round(&mut self) -> Result<RoundSummary, DomainError> {
        let round_no = self.state.round_no();
        debug!(round_no, deck = self.state.deck_size(), "Round started");
        for seat in self.seats() {
            let view = self.state.player_view(seat)?;
            self.agents[seat as usize].new_round(&view);
        }

        let mut turns = 0;
        let mut substitutions = 0;
        while !self.state.round_over() {
            let seat = self.state.turn();
            let drawn = self.state.draw_card()?;
            debug!(round_no, seat, %drawn, "Drew");

            let (action, substituted) = self.request_action(seat, drawn)?;
            let description = self.state.update(&action, drawn)?;
            debug!(round_no, seat, "{description}");
            turns += 1;
            substitutions += u32::from(substituted);

            for observer in self.seats() {
                let view = self.state.player_view(observer)?;
                self.agents[observer as usize].see(&action, &view);
            }
        }

        let summary = RoundSummary {
            round_no,
            winner: self.state.round_winner(),
            turns,
            substitutions,
            eliminations: self
                .seats()
                .filter(|&p| self.state.eliminated(p))
                .collect(),
        };
        info!(
            round_no,
            winner = ?summary.winner,
            turns,
            substitutions,
            scores = ?self.state.scores(),
            "Round finished"
        );
        Ok(summary)
    }

    fn seats(&self) -> impl Iterator<Item = PlayerId> {
        0..self.state.num_players() as PlayerId
    }
}
