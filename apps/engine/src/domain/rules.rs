use std::ops::RangeInclusive;

use crate::errors::domain::DomainError;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 16;

pub fn player_count_range() -> RangeInclusive<usize> {
    MIN_PLAYERS..=MAX_PLAYERS
}

pub fn validate_player_count(num_players: usize) -> Result<(), DomainError> {
    if !player_count_range().contains(&num_players) {
        return Err(DomainError::config(format!(
            "Player count must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {num_players}"
        )));
    }
    Ok(())
}

// Round wins needed to take the match: 2 players → 7, 3 → 5, 4 → 4.
pub fn win_threshold(num_players: usize) -> Option<u8> {
    match num_players {
        2 => Some(7),
        3 => Some(5),
        4 => Some(4),
        _ => None,
    }
}
