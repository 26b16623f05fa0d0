//! Round and match state owned by the engine.
//!
//! `GameState` is the omniscient, mutable side. Players only ever see a
//! [`PlayerView`], an independent redacted copy built by
//! [`GameState::player_view`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::domain::dealing::{standard_deck, Deck};
use crate::domain::legality::{self, TableFacts};
use crate::domain::player_view::PlayerView;
use crate::domain::rules::{validate_player_count, win_threshold};
use crate::domain::scoring;
use crate::domain::{Action, Card};
use crate::errors::domain::DomainError;

pub type PlayerId = u8; // 0..=3

/// Next seat clockwise, wrapping at the table size.
#[inline]
pub fn next_seat(seat: PlayerId, num_players: usize) -> PlayerId {
    ((seat as usize + 1) % num_players) as PlayerId
}

/// Everything about the round in progress. Reset by every deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    /// Held card per seat; `None` once the seat is eliminated.
    pub(crate) hands: Vec<Option<Card>>,
    pub(crate) deck: Deck,
    /// Discards per seat, oldest first.
    pub(crate) discards: Vec<Vec<Card>>,
    /// Handmaid shield, cleared on the seat's next play.
    pub(crate) protected: Vec<bool>,
    /// `known[p][q]`: seat `p` knows the card seat `q` holds.
    pub(crate) known: Vec<Vec<bool>>,
    pub(crate) turn: PlayerId,
    /// Set once the closing play has been scored.
    pub(crate) settled: bool,
}

impl RoundState {
    /// Deal one card to each seat from `deck`; seat 0 starts.
    pub(crate) fn deal(num_players: usize, mut deck: Deck) -> Self {
        let hands = (0..num_players).map(|_| deck.draw()).collect();
        let known = (0..num_players)
            .map(|p| (0..num_players).map(|q| p == q).collect())
            .collect();
        Self {
            hands,
            deck,
            discards: vec![Vec::new(); num_players],
            protected: vec![false; num_players],
            known,
            turn: 0,
            settled: false,
        }
    }

    pub fn num_players(&self) -> usize {
        self.hands.len()
    }

    pub fn hand(&self, player: PlayerId) -> Option<Card> {
        self.hands.get(player as usize).copied().flatten()
    }

    pub fn eliminated(&self, player: PlayerId) -> bool {
        self.hand(player).is_none()
    }

    pub fn protected(&self, player: PlayerId) -> bool {
        self.protected.get(player as usize).copied().unwrap_or(false)
    }

    pub fn knows(&self, observer: PlayerId, subject: PlayerId) -> bool {
        self.known
            .get(observer as usize)
            .and_then(|row| row.get(subject as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Discards of `player`, most recent first.
    pub fn discards(&self, player: PlayerId) -> impl Iterator<Item = Card> + '_ {
        self.discards
            .get(player as usize)
            .into_iter()
            .flat_map(|pile| pile.iter().rev().copied())
    }

    pub fn deck_size(&self) -> usize {
        self.deck.remaining()
    }

    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn remaining_players(&self) -> usize {
        self.hands.iter().filter(|h| h.is_some()).count()
    }

    /// One seat left standing, or nothing left to draw. Counting the burned
    /// card, that is fewer than two cards in the deck.
    pub fn is_over(&self) -> bool {
        self.remaining_players() == 1 || self.deck.remaining() == 0
    }

    /// Whether the closing play has been resolved and the round scored.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Cards still live: held hands, the undrawn deck and the burned card,
    /// sorted.
    pub fn unseen_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.hands.iter().flatten().copied().collect();
        cards.extend_from_slice(self.deck.undrawn());
        cards.extend(self.deck.burned());
        cards.sort();
        cards
    }

    /// Hands + discards + undrawn deck + burned card.
    pub fn card_count(&self) -> usize {
        self.hands.iter().flatten().count()
            + self.discards.iter().map(Vec::len).sum::<usize>()
            + self.deck.remaining()
            + usize::from(self.deck.burned().is_some())
    }

    // --- mutation helpers used by the transition and effect code ---

    /// Move the held card to the discard pile, clear the hand and make the
    /// loss public.
    pub(crate) fn eliminate(&mut self, player: PlayerId) {
        let p = player as usize;
        if let Some(card) = self.hands[p].take() {
            self.discards[p].push(card);
        }
        self.protected[p] = false;
        for row in &mut self.known {
            row[p] = true;
        }
    }

    /// Everyone but `player` stops knowing `player`'s card.
    pub(crate) fn forget(&mut self, player: PlayerId) {
        let p = player as usize;
        for (observer, row) in self.known.iter_mut().enumerate() {
            if observer != p {
                row[p] = false;
            }
        }
    }

    pub(crate) fn reveal_all(&mut self) {
        for row in &mut self.known {
            row.iter_mut().for_each(|k| *k = true);
        }
    }

    /// Hand the turn to the next seat still in the round.
    pub(crate) fn advance_turn(&mut self) {
        let n = self.num_players();
        let mut seat = next_seat(self.turn, n);
        for _ in 0..n {
            if !self.eliminated(seat) {
                break;
            }
            seat = next_seat(seat, n);
        }
        self.turn = seat;
    }
}

impl TableFacts for RoundState {
    fn num_players(&self) -> usize {
        RoundState::num_players(self)
    }

    fn held(&self, player: PlayerId) -> Option<Card> {
        self.hand(player)
    }

    fn turn(&self) -> PlayerId {
        self.turn
    }

    fn eliminated(&self, player: PlayerId) -> bool {
        RoundState::eliminated(self, player)
    }

    fn protected(&self, player: PlayerId) -> bool {
        RoundState::protected(self, player)
    }
}

/// The omniscient engine: seating, scores across rounds, and the live round.
#[derive(Debug)]
pub struct GameState<R = ChaCha8Rng> {
    pub(crate) names: Vec<String>,
    scores: Vec<u8>,
    pub(crate) round: RoundState,
    round_no: u32,
    rng: R,
}

impl GameState<ChaCha8Rng> {
    /// Engine with a reproducible shuffle sequence.
    pub fn seeded(names: Vec<String>, seed: u64) -> Result<Self, DomainError> {
        Self::new(names, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameState<R> {
    /// Seat the players (2..=4, first listed starts) and deal the first round.
    pub fn new(names: Vec<String>, mut rng: R) -> Result<Self, DomainError> {
        let deck = Deck::shuffled(&mut rng);
        Self::from_deck(names, deck, rng)
    }

    /// Shuffle and deal a new round. Scores carry over.
    pub fn new_round(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        self.new_round_from_deck(deck);
    }
}

impl<R> GameState<R> {
    /// Seat the players and deal the first round from a prepared deck.
    ///
    /// `rng` is kept for the shuffles of later rounds.
    pub fn from_deck(names: Vec<String>, deck: Deck, rng: R) -> Result<Self, DomainError> {
        validate_player_count(names.len())?;
        let round = RoundState::deal(names.len(), deck);
        info!(players = names.len(), "Seated new match");
        Ok(Self {
            scores: vec![0; names.len()],
            names,
            round,
            round_no: 1,
            rng,
        })
    }

    /// Deal a new round from a prepared deck (replays and scripted tables).
    pub fn new_round_from_deck(&mut self, deck: Deck) {
        self.round = RoundState::deal(self.names.len(), deck);
        self.round_no += 1;
        debug!(round_no = self.round_no, "Dealt new round");
    }

    /// Redacted snapshot for one seat.
    pub fn player_view(&self, player: PlayerId) -> Result<PlayerView, DomainError> {
        if player as usize >= self.num_players() {
            return Err(DomainError::config(format!(
                "Player {player} out of range for {} seats",
                self.num_players()
            )));
        }
        Ok(PlayerView::capture(self, player))
    }

    /// Take the next card off the deck for the turn owner.
    pub fn draw_card(&mut self) -> Result<Card, DomainError> {
        if self.round.is_over() {
            return Err(DomainError::not_permitted("Cannot draw once the round is over"));
        }
        self.round
            .deck
            .draw()
            .ok_or_else(|| DomainError::not_permitted("Deck is empty"))
    }

    /// Whether `action`, with `drawn` just taken from the deck, is legal now.
    pub fn legal_action(&self, action: &Action, drawn: Card) -> bool {
        self.check_action(action, drawn).is_ok()
    }

    /// Like [`legal_action`](Self::legal_action), reporting the broken rule.
    pub fn check_action(&self, action: &Action, drawn: Card) -> Result<(), DomainError> {
        legality::check_action(&self.round, action, drawn)
    }

    pub fn num_players(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Display name used in descriptions: `name(seat)`.
    pub fn display_name(&self, player: PlayerId) -> String {
        display_name(&self.names, player)
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// 1-based number of the round in progress.
    pub fn round_no(&self) -> u32 {
        self.round_no
    }

    pub fn turn(&self) -> PlayerId {
        self.round.turn
    }

    /// Card held by `player`, without redaction.
    pub fn card(&self, player: PlayerId) -> Option<Card> {
        self.round.hand(player)
    }

    pub fn eliminated(&self, player: PlayerId) -> bool {
        self.round.eliminated(player)
    }

    pub fn protected(&self, player: PlayerId) -> bool {
        self.round.protected(player)
    }

    /// Every seat other than `player` is eliminated or shielded.
    pub fn all_protected_except(&self, player: PlayerId) -> bool {
        legality::all_protected_except(&self.round, player)
    }

    pub fn knows(&self, observer: PlayerId, subject: PlayerId) -> bool {
        self.round.knows(observer, subject)
    }

    pub fn discards(&self, player: PlayerId) -> impl Iterator<Item = Card> + '_ {
        self.round.discards(player)
    }

    pub fn deck_size(&self) -> usize {
        self.round.deck_size()
    }

    pub fn unseen_cards(&self) -> Vec<Card> {
        self.round.unseen_cards()
    }

    pub fn score(&self, player: PlayerId) -> u8 {
        self.scores.get(player as usize).copied().unwrap_or(0)
    }

    pub fn scores(&self) -> &[u8] {
        &self.scores
    }

    pub fn round_over(&self) -> bool {
        self.round.is_over()
    }

    /// Winner of the finished round; `None` while it is still running.
    pub fn round_winner(&self) -> Option<PlayerId> {
        scoring::round_winner(&self.round)
    }

    pub fn game_over(&self) -> bool {
        self.game_winner().is_some()
    }

    pub fn game_winner(&self) -> Option<PlayerId> {
        scoring::game_winner(&self.scores)
    }

    /// Round wins this table needs to take the match.
    pub fn win_threshold(&self) -> u8 {
        win_threshold(self.num_players()).unwrap_or(u8::MAX)
    }

    pub(crate) fn award_round(&mut self, winner: PlayerId) {
        if let Some(score) = self.scores.get_mut(winner as usize) {
            *score = score.saturating_add(1);
        }
    }

    #[cfg(test)]
    pub(crate) fn set_scores(&mut self, scores: &[u8]) {
        self.scores.copy_from_slice(scores);
    }
}

pub(crate) fn display_name(names: &[String], player: PlayerId) -> String {
    match names.get(player as usize) {
        Some(name) => format!("{name}({player})"),
        None => format!("({player})"),
    }
}

/// Cards of the standard deck that are neither discarded nor in `known_hands`.
pub(crate) fn unaccounted<'a>(
    discards: impl IntoIterator<Item = &'a Card>,
    known_hands: impl IntoIterator<Item = Card>,
) -> Vec<Card> {
    let mut pool = standard_deck();
    for card in discards.into_iter().copied().chain(known_hands) {
        if let Some(pos) = pool.iter().position(|c| *c == card) {
            pool.remove(pos);
        }
    }
    pool
}
