//! RNG seed derivation utilities for deterministic matches.
//!
//! A single base seed fans out into one seed per match and one seed per
//! agent, so a whole simulation run can be replayed from one number.

use crate::domain::state::PlayerId;

/// SplitMix64 finaliser: well-distributed 64-bit mixing.
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E3779B97F4A7C15);
    z ^= z >> 30;
    z = z.wrapping_mul(0xBF58476D1CE4E5B9);
    z ^= z >> 27;
    z = z.wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

/// Derive the deal seed for match number `game_no` of a run.
pub fn derive_game_seed(base_seed: u64, game_no: u32) -> u64 {
    mix(base_seed ^ (u64::from(game_no)).wrapping_mul(1_000_003))
}

/// Derive the decision seed for the agent in `seat` of one match.
///
/// Offset from the deal seed so an agent never replays the shuffle stream.
pub fn derive_agent_seed(game_seed: u64, seat: PlayerId) -> u64 {
    mix(game_seed.wrapping_add(u64::from(seat) + 1).rotate_left(17))
}
