//! Per-card effects, applied after the common bookkeeping of a play.
//!
//! Each arm reads the round as it stands after the actor has discarded the
//! played card, mutates it, and returns the sentence(s) describing what
//! happened. Sentences start with a newline so they append to the play's
//! own description.

use crate::domain::legality::all_protected_except;
use crate::domain::state::{display_name, PlayerId, RoundState};
use crate::domain::{Action, Card};

pub(crate) fn resolve(round: &mut RoundState, action: &Action, names: &[String]) -> String {
    let actor = action.player();
    let name = |p: PlayerId| display_name(names, p);
    match (action.card(), action.target()) {
        (Card::Guard, Some(target)) => guard(round, actor, target, action.guess(), &name),
        (Card::Priest, Some(target)) => priest(round, actor, target, &name),
        (Card::Baron, Some(target)) => baron(round, actor, target, &name),
        (Card::Handmaid, _) => {
            round.protected[actor as usize] = true;
            String::new()
        }
        (Card::Prince, Some(target)) => prince(round, target, &name),
        (Card::King, Some(target)) => king(round, actor, target, &name),
        (Card::Countess, _) => String::new(),
        (Card::Princess, _) => princess(round, actor, &name),
        // Targeted cards always carry a target; the Action factories enforce it.
        (Card::Guard | Card::Priest | Card::Baron | Card::Prince | Card::King, None) => {
            String::new()
        }
    }
}

fn shielded(
    round: &RoundState,
    actor: PlayerId,
    target: PlayerId,
    name: &dyn Fn(PlayerId) -> String,
) -> Option<String> {
    all_protected_except(round, actor)
        .then(|| format!("\nPlayer {} is protected by the Handmaid.", name(target)))
}

fn guard(
    round: &mut RoundState,
    actor: PlayerId,
    target: PlayerId,
    guess: Option<Card>,
    name: &dyn Fn(PlayerId) -> String,
) -> String {
    if let Some(blocked) = shielded(round, actor, target, name) {
        return blocked;
    }
    let Some(guess) = guess else {
        return String::new();
    };
    if round.hand(target) == Some(guess) {
        round.eliminate(target);
        format!(
            "\nPlayer {} had the {guess} and is eliminated from the round",
            name(target)
        )
    } else {
        format!("\nPlayer {} does not have the {guess}", name(target))
    }
}

fn priest(
    round: &mut RoundState,
    actor: PlayerId,
    target: PlayerId,
    name: &dyn Fn(PlayerId) -> String,
) -> String {
    if let Some(blocked) = shielded(round, actor, target, name) {
        return blocked;
    }
    round.known[actor as usize][target as usize] = true;
    format!("\nPlayer {} sees player {}'s card.", name(actor), name(target))
}

fn baron(
    round: &mut RoundState,
    actor: PlayerId,
    target: PlayerId,
    name: &dyn Fn(PlayerId) -> String,
) -> String {
    if let Some(blocked) = shielded(round, actor, target, name) {
        return blocked;
    }
    let (Some(mine), Some(theirs)) = (round.hand(actor), round.hand(target)) else {
        return String::new();
    };
    let loser = match mine.value().cmp(&theirs.value()) {
        std::cmp::Ordering::Greater => Some((target, theirs)),
        std::cmp::Ordering::Less => Some((actor, mine)),
        std::cmp::Ordering::Equal => None,
    };
    match loser {
        Some((loser, card)) => {
            round.eliminate(loser);
            format!(
                "\nPlayer {} holds the lesser card: {card}, and is eliminated",
                name(loser)
            )
        }
        None => {
            round.known[actor as usize][target as usize] = true;
            round.known[target as usize][actor as usize] = true;
            "\nBoth players hold the same card, and neither is eliminated.".to_string()
        }
    }
}

fn prince(round: &mut RoundState, target: PlayerId, name: &dyn Fn(PlayerId) -> String) -> String {
    let t = target as usize;
    let Some(discarded) = round.hands[t] else {
        return String::new();
    };
    if discarded == Card::Princess {
        round.eliminate(target);
        return format!(
            "\nPlayer {} discarded the Princess and is eliminated.",
            name(target)
        );
    }
    round.discards[t].push(discarded);
    // An empty deck hands out the burned card instead.
    round.hands[t] = round.deck.draw().or_else(|| round.deck.take_burned());
    if round.hands[t].is_none() {
        round.eliminate(target);
    } else {
        round.forget(target);
    }
    format!("\nPlayer {} discards the {discarded}.", name(target))
}

fn king(
    round: &mut RoundState,
    actor: PlayerId,
    target: PlayerId,
    name: &dyn Fn(PlayerId) -> String,
) -> String {
    if let Some(blocked) = shielded(round, actor, target, name) {
        return blocked;
    }
    let (a, t) = (actor as usize, target as usize);
    round.known[a][t] = true;
    round.known[t][a] = true;
    // Third parties keep tracking the physical card, not the seat.
    for (observer, row) in round.known.iter_mut().enumerate() {
        if observer != a && observer != t {
            row.swap(a, t);
        }
    }
    round.hands.swap(a, t);
    format!(
        "\nPlayer {} and player {} swap cards.",
        name(actor),
        name(target)
    )
}

fn princess(round: &mut RoundState, actor: PlayerId, name: &dyn Fn(PlayerId) -> String) -> String {
    let held = round.hand(actor);
    round.eliminate(actor);
    let mut outcome = format!(
        "\nPlayer {} played the Princess and is eliminated.",
        name(actor)
    );
    if let Some(card) = held {
        outcome.push_str(&format!(
            "\nPlayer {} was also holding the {card}.",
            name(actor)
        ));
    }
    outcome
}
