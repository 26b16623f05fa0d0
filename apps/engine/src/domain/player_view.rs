//! Player view of game state - what information is visible to one seat.
//!
//! A [`PlayerView`] is an independent, read-only snapshot. It is built by
//! copying only public facts plus the hands the viewer's row of the
//! knowledge matrix grants, so later engine mutations never show through
//! and nothing hidden can be read back out of it.
//!
//! Agents receive a fresh view at the start of every round and after every
//! resolved play, and use [`PlayerView::legal_actions`] rather than
//! re-implementing the rules.

use serde::Serialize;

use crate::domain::legality::{self, TableFacts};
use crate::domain::state::{display_name, unaccounted, GameState, PlayerId};
use crate::domain::{Action, Card};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerView {
    /// Seat this view belongs to.
    viewer: PlayerId,
    names: Vec<String>,
    /// Held cards, `None` where unknown to the viewer or eliminated.
    hands: Vec<Option<Card>>,
    /// Viewer's row of the knowledge matrix.
    known: Vec<bool>,
    eliminated: Vec<bool>,
    protected: Vec<bool>,
    /// Discard piles, oldest first.
    discards: Vec<Vec<Card>>,
    turn: PlayerId,
    deck_size: usize,
    scores: Vec<u8>,
    round_no: u32,
    round_over: bool,
    /// The closing play has been scored; nothing more may be played.
    settled: bool,
}

impl PlayerView {
    pub(crate) fn capture<R>(state: &GameState<R>, viewer: PlayerId) -> Self {
        let round = state.round();
        let n = state.num_players() as PlayerId;
        let known: Vec<bool> = (0..n).map(|q| round.knows(viewer, q)).collect();
        let hands = (0..n)
            .map(|q| round.hand(q).filter(|_| known[q as usize]))
            .collect();
        Self {
            viewer,
            names: state.names().to_vec(),
            hands,
            known,
            eliminated: (0..n).map(|q| round.eliminated(q)).collect(),
            protected: (0..n).map(|q| round.protected(q)).collect(),
            discards: round.discards.clone(),
            turn: round.turn(),
            deck_size: round.deck_size(),
            scores: state.scores().to_vec(),
            round_no: state.round_no(),
            round_over: round.is_over(),
            settled: round.is_settled(),
        }
    }

    pub fn viewer(&self) -> PlayerId {
        self.viewer
    }

    pub fn num_players(&self) -> usize {
        self.names.len()
    }

    /// Display name of a seat, as used in play descriptions.
    pub fn name(&self, player: PlayerId) -> String {
        display_name(&self.names, player)
    }

    /// The viewer's own card, `None` once eliminated.
    pub fn hand(&self) -> Option<Card> {
        self.card(self.viewer)
    }

    /// Card held by `player`, if the viewer knows it.
    pub fn card(&self, player: PlayerId) -> Option<Card> {
        self.hands.get(player as usize).copied().flatten()
    }

    pub fn knows(&self, player: PlayerId) -> bool {
        self.known.get(player as usize).copied().unwrap_or(false)
    }

    pub fn eliminated(&self, player: PlayerId) -> bool {
        self.eliminated.get(player as usize).copied().unwrap_or(true)
    }

    pub fn protected(&self, player: PlayerId) -> bool {
        self.protected.get(player as usize).copied().unwrap_or(false)
    }

    pub fn all_protected_except(&self, player: PlayerId) -> bool {
        legality::all_protected_except(self, player)
    }

    /// Discards of `player`, most recent first.
    pub fn discards(&self, player: PlayerId) -> impl Iterator<Item = Card> + '_ {
        self.discards
            .get(player as usize)
            .into_iter()
            .flat_map(|pile| pile.iter().rev().copied())
    }

    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn score(&self, player: PlayerId) -> u8 {
        self.scores.get(player as usize).copied().unwrap_or(0)
    }

    pub fn scores(&self) -> &[u8] {
        &self.scores
    }

    pub fn round_no(&self) -> u32 {
        self.round_no
    }

    pub fn round_over(&self) -> bool {
        self.round_over
    }

    /// Cards the viewer cannot place: the full deck minus every discard and
    /// every hand the viewer knows (its own included), sorted.
    pub fn unaccounted_cards(&self) -> Vec<Card> {
        unaccounted(
            self.discards.iter().flatten(),
            self.hands.iter().flatten().copied(),
        )
    }

    /// Whether the viewer may play `action` having drawn `drawn`.
    pub fn is_legal(&self, action: &Action, drawn: Card) -> bool {
        legality::check_action(self, action, drawn).is_ok()
    }

    /// Every action the viewer could legally submit after drawing `drawn`.
    ///
    /// Empty when it is not the viewer's turn or the round has been scored.
    /// The closing turn of a round, taken with the deck already empty, still
    /// has its actions.
    pub fn legal_actions(&self, drawn: Card) -> Vec<Action> {
        if self.settled || self.turn != self.viewer {
            return Vec::new();
        }
        let mut cards: Vec<Card> = self.hand().into_iter().chain([drawn]).collect();
        cards.dedup();

        let seats: Vec<PlayerId> = (0..self.num_players() as PlayerId).collect();
        let mut actions = Vec::new();
        for card in cards {
            let candidates: Vec<Action> = match card {
                Card::Guard => seats
                    .iter()
                    .flat_map(|&t| {
                        Card::ALL
                            .into_iter()
                            .skip(1)
                            .filter_map(move |g| Action::play_guard(self.viewer, t, Some(g)).ok())
                    })
                    .collect(),
                _ if card.takes_target() => seats
                    .iter()
                    .filter_map(|&t| Action::for_card(card, self.viewer, Some(t), None).ok())
                    .collect(),
                _ => Action::for_card(card, self.viewer, None, None)
                    .into_iter()
                    .collect(),
            };
            actions.extend(candidates.into_iter().filter(|a| self.is_legal(a, drawn)));
        }
        actions
    }
}

impl TableFacts for PlayerView {
    fn num_players(&self) -> usize {
        PlayerView::num_players(self)
    }

    fn held(&self, player: PlayerId) -> Option<Card> {
        self.card(player)
    }

    fn turn(&self) -> PlayerId {
        self.turn
    }

    fn eliminated(&self, player: PlayerId) -> bool {
        PlayerView::eliminated(self, player)
    }

    fn protected(&self, player: PlayerId) -> bool {
        PlayerView::protected(self, player)
    }
}
