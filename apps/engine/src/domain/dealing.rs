//! Deck construction, shuffling and draw order.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::domain::rules::DECK_SIZE;
use crate::domain::Card;
use crate::errors::domain::DomainError;

/// The 16-card deck in catalog order.
pub fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for card in Card::ALL {
        for _ in 0..card.count() {
            deck.push(card);
        }
    }
    deck
}

/// A uniformly shuffled 16-card deck.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut deck = standard_deck();
    deck.shuffle(rng);
    deck
}

/// Cards remaining for a round.
///
/// The first card of the order is burned face down when the deck is built;
/// draws then come off the front of what is left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
    top: usize,
    burned: Option<Card>,
}

impl Deck {
    /// Shuffle a fresh deck and burn its first card.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::burn_first(shuffled_deck(rng))
    }

    /// Build a deck from an explicit order (burned card first).
    ///
    /// The order must be a permutation of the standard deck.
    pub fn from_order(cards: Vec<Card>) -> Result<Self, DomainError> {
        let mut sorted = cards.clone();
        sorted.sort();
        if sorted != standard_deck() {
            return Err(DomainError::config(
                "Deck order must be a permutation of the 16-card deck",
            ));
        }
        Ok(Self::burn_first(cards))
    }

    /// Build a deck whose first cards are `prefix` (burned card, then the deal,
    /// then draws); the rest of the standard deck follows in catalog order.
    pub fn stacked(prefix: &[Card]) -> Result<Self, DomainError> {
        let mut rest = standard_deck();
        for card in prefix {
            let pos = rest.iter().position(|c| c == card).ok_or_else(|| {
                DomainError::config(format!("Stacked deck has too many copies of the {card}"))
            })?;
            rest.remove(pos);
        }
        let mut order = prefix.to_vec();
        order.extend(rest);
        Self::from_order(order)
    }

    fn burn_first(cards: Vec<Card>) -> Self {
        let burned = cards.first().copied();
        Self {
            cards,
            top: 1,
            burned,
        }
    }

    /// Take the next card in draw order.
    pub fn draw(&mut self) -> Option<Card> {
        let card = self.cards.get(self.top).copied()?;
        self.top += 1;
        Some(card)
    }

    /// Cards still to be drawn (the burned card is not counted).
    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.top)
    }

    /// Undrawn cards in draw order.
    pub fn undrawn(&self) -> &[Card] {
        self.cards.get(self.top..).unwrap_or(&[])
    }

    pub fn burned(&self) -> Option<Card> {
        self.burned
    }

    /// Hand out the burned card; used only when a forced discard meets an
    /// empty deck.
    pub(crate) fn take_burned(&mut self) -> Option<Card> {
        self.burned.take()
    }
}
