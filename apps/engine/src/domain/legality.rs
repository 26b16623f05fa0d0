//! Legality of an action against the table as the actor can see it.
//!
//! Every fact consulted here (own cards, turn, elimination, Handmaid
//! shields) is public or belongs to the actor, so the same check runs on
//! the engine state and on a player's own view.

use crate::domain::state::PlayerId;
use crate::domain::{Action, Card};
use crate::errors::domain::{ActionViolation, DomainError};

/// Read-only table facts legality depends on.
pub(crate) trait TableFacts {
    fn num_players(&self) -> usize;
    /// Card held by `player`, where the caller is entitled to know it.
    fn held(&self, player: PlayerId) -> Option<Card>;
    fn turn(&self) -> PlayerId;
    fn eliminated(&self, player: PlayerId) -> bool;
    fn protected(&self, player: PlayerId) -> bool;
}

/// Every seat except `player` is eliminated or shielded by the Handmaid.
pub(crate) fn all_protected_except<T: TableFacts + ?Sized>(table: &T, player: PlayerId) -> bool {
    (0..table.num_players() as PlayerId)
        .filter(|&p| p != player)
        .all(|p| table.eliminated(p) || table.protected(p))
}

/// Validate `action` for an actor who has just drawn `drawn`.
///
/// Checks run in order and stop at the first failure:
/// 1. the actor holds the played card (in hand or just drawn);
/// 2. it is the actor's turn;
/// 3. with the Countess in hand or drawn, neither King nor Prince may be played;
/// 4. a target must still be in the round and, unless every other seat is
///    shielded, must not be shielded. The Prince may always target its own
///    player, and may never target a shielded seat.
pub(crate) fn check_action<T: TableFacts + ?Sized>(
    table: &T,
    action: &Action,
    drawn: Card,
) -> Result<(), DomainError> {
    let actor = action.player();
    let card = action.card();
    let n = table.num_players();

    if actor as usize >= n {
        return Err(DomainError::invalid_action(
            ActionViolation::PlayerOutOfRange,
            format!("Player {actor} is not seated"),
        ));
    }
    if let Some(target) = action.target() {
        if target as usize >= n {
            return Err(DomainError::invalid_action(
                ActionViolation::PlayerOutOfRange,
                format!("Target {target} is not seated"),
            ));
        }
    }

    let held = table.held(actor);
    if held != Some(card) && drawn != card {
        return Err(DomainError::invalid_action(
            ActionViolation::CardNotHeld,
            format!("Player does not hold the {card}"),
        ));
    }

    if table.turn() != actor {
        return Err(DomainError::invalid_action(
            ActionViolation::OutOfTurn,
            "Wrong player in action",
        ));
    }

    let has_countess = held == Some(Card::Countess) || drawn == Card::Countess;
    if has_countess && matches!(card, Card::King | Card::Prince) {
        return Err(DomainError::invalid_action(
            ActionViolation::CountessRequired,
            "Player must play the Countess",
        ));
    }

    if let Some(target) = action.target() {
        if table.eliminated(target) {
            return Err(DomainError::invalid_action(
                ActionViolation::TargetEliminated,
                "The action's target is already eliminated",
            ));
        }
        if card == Card::Prince && target == actor {
            return Ok(());
        }
        if table.protected(target) && (!all_protected_except(table, actor) || card == Card::Prince)
        {
            return Err(DomainError::invalid_action(
                ActionViolation::TargetProtected,
                "The action's target is protected by the Handmaid",
            ));
        }
    }

    Ok(())
}
