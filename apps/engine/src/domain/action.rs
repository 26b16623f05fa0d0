//! Immutable description of one play: who plays which card at whom, with
//! the Guard's guess.
//!
//! Factories check only the argument shape for each kind; whether the play
//! is legal right now is decided by the engine against live state.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rules::MAX_PLAYERS;
use crate::domain::state::PlayerId;
use crate::domain::Card;
use crate::errors::domain::{ActionViolation, DomainError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    player: PlayerId,
    target: Option<PlayerId>,
    card: Card,
    guess: Option<Card>,
}

fn require_target(target: Option<PlayerId>) -> Result<PlayerId, DomainError> {
    target.ok_or_else(|| {
        DomainError::invalid_action(ActionViolation::TargetRequired, "Target must be specified")
    })
}

fn forbid_self(player: PlayerId, target: PlayerId) -> Result<(), DomainError> {
    if player == target {
        return Err(DomainError::invalid_action(
            ActionViolation::SelfTarget,
            "Player cannot target themself",
        ));
    }
    Ok(())
}

impl Action {
    fn new(
        card: Card,
        player: PlayerId,
        target: Option<PlayerId>,
        guess: Option<Card>,
    ) -> Result<Self, DomainError> {
        if player as usize >= MAX_PLAYERS {
            return Err(DomainError::invalid_action(
                ActionViolation::PlayerOutOfRange,
                format!("Player {player} out of range"),
            ));
        }
        if let Some(t) = target {
            if t as usize >= MAX_PLAYERS {
                return Err(DomainError::invalid_action(
                    ActionViolation::PlayerOutOfRange,
                    format!("Target {t} out of range"),
                ));
            }
        }
        Ok(Self {
            player,
            target,
            card,
            guess,
        })
    }

    /// Guard: name a target and a non-Guard card they might hold.
    pub fn play_guard(
        player: PlayerId,
        target: PlayerId,
        guess: Option<Card>,
    ) -> Result<Self, DomainError> {
        forbid_self(player, target)?;
        let guess = guess.ok_or_else(|| {
            DomainError::invalid_action(
                ActionViolation::GuessRequired,
                "Player cannot guess a null card",
            )
        })?;
        if guess == Card::Guard {
            return Err(DomainError::invalid_action(
                ActionViolation::GuardGuess,
                "Player cannot guess a guard",
            ));
        }
        Self::new(Card::Guard, player, Some(target), Some(guess))
    }

    pub fn play_priest(player: PlayerId, target: PlayerId) -> Result<Self, DomainError> {
        forbid_self(player, target)?;
        Self::new(Card::Priest, player, Some(target), None)
    }

    pub fn play_baron(player: PlayerId, target: PlayerId) -> Result<Self, DomainError> {
        forbid_self(player, target)?;
        Self::new(Card::Baron, player, Some(target), None)
    }

    pub fn play_handmaid(player: PlayerId) -> Result<Self, DomainError> {
        Self::new(Card::Handmaid, player, None, None)
    }

    /// Prince may target the actor themself.
    pub fn play_prince(player: PlayerId, target: PlayerId) -> Result<Self, DomainError> {
        Self::new(Card::Prince, player, Some(target), None)
    }

    pub fn play_king(player: PlayerId, target: PlayerId) -> Result<Self, DomainError> {
        forbid_self(player, target)?;
        Self::new(Card::King, player, Some(target), None)
    }

    pub fn play_countess(player: PlayerId) -> Result<Self, DomainError> {
        Self::new(Card::Countess, player, None, None)
    }

    pub fn play_princess(player: PlayerId) -> Result<Self, DomainError> {
        Self::new(Card::Princess, player, None, None)
    }

    /// Build an action for any card, routing to the matching factory.
    ///
    /// Rejects a target on untargeted cards and a guess on anything but the
    /// Guard instead of silently dropping them.
    pub fn for_card(
        card: Card,
        player: PlayerId,
        target: Option<PlayerId>,
        guess: Option<Card>,
    ) -> Result<Self, DomainError> {
        if card != Card::Guard && guess.is_some() {
            return Err(DomainError::invalid_action(
                ActionViolation::GuessForbidden,
                format!("The {card} takes no guess"),
            ));
        }
        if !card.takes_target() && target.is_some() {
            return Err(DomainError::invalid_action(
                ActionViolation::TargetForbidden,
                format!("The {card} takes no target"),
            ));
        }
        match card {
            Card::Guard => Self::play_guard(player, require_target(target)?, guess),
            Card::Priest => Self::play_priest(player, require_target(target)?),
            Card::Baron => Self::play_baron(player, require_target(target)?),
            Card::Handmaid => Self::play_handmaid(player),
            Card::Prince => Self::play_prince(player, require_target(target)?),
            Card::King => Self::play_king(player, require_target(target)?),
            Card::Countess => Self::play_countess(player),
            Card::Princess => Self::play_princess(player),
        }
    }

    pub fn player(&self) -> PlayerId {
        self.player
    }

    pub fn target(&self) -> Option<PlayerId> {
        self.target
    }

    pub fn card(&self) -> Card {
        self.card
    }

    pub fn guess(&self) -> Option<Card> {
        self.guess
    }

    /// Render the play with the given display names for actor and target.
    pub fn describe(&self, player: &str, target: &str) -> String {
        let opening = format!("Player {player} played the {}", self.card);
        match self.card {
            Card::Guard => match self.guess {
                Some(guess) => {
                    format!("{opening} and guessed player {target} held the {guess}.")
                }
                None => format!("{opening}."),
            },
            Card::Priest => format!("{opening} and asked to see player {target}'s card."),
            Card::Baron => format!("{opening} and challenged player {target}."),
            Card::Prince => format!("{opening} and asked player {target} to discard."),
            Card::King => format!("{opening} and asked player {target} to swap cards."),
            Card::Handmaid | Card::Countess | Card::Princess => format!("{opening}."),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let target = self.target.map(|t| t.to_string()).unwrap_or_default();
        f.write_str(&self.describe(&self.player.to_string(), &target))
    }
}
