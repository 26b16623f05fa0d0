use crate::domain::rules::win_threshold;
use crate::domain::state::{PlayerId, RoundState};

/// Sum of card values in a seat's discard pile.
pub fn discard_value(round: &RoundState, player: PlayerId) -> u32 {
    round.discards(player).map(|c| u32::from(c.value())).sum()
}

/// Winner of a finished round: highest held card, then highest discard
/// total, then lowest seat. `None` while the round is still running.
pub fn round_winner(round: &RoundState) -> Option<PlayerId> {
    if !round.is_over() {
        return None;
    }
    let mut best: Option<(PlayerId, u8, u32)> = None;
    for p in 0..round.num_players() as PlayerId {
        let Some(card) = round.hand(p) else {
            continue;
        };
        let dv = discard_value(round, p);
        let better = match best {
            None => true,
            Some((_, top, top_dv)) => card.value() > top || (card.value() == top && dv > top_dv),
        };
        if better {
            best = Some((p, card.value(), dv));
        }
    }
    best.map(|(p, _, _)| p)
}

/// First seat whose round wins reached the table's threshold.
pub fn game_winner(scores: &[u8]) -> Option<PlayerId> {
    let threshold = win_threshold(scores.len())?;
    scores
        .iter()
        .position(|&s| s >= threshold)
        .map(|p| p as PlayerId)
}
