//! RNG seed derivation utilities for deterministic game behavior.
//!
//! Every random decision in a game draws from its own stream, derived from
//! one base seed, so that changing how one stream is consumed never shifts
//! another.

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 finalizer.
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn derive(base: u64, stream: u64, index: u64) -> u64 {
    mix(base
        .wrapping_add(stream.wrapping_mul(GOLDEN_GAMMA))
        .wrapping_add(mix(index.wrapping_add(1))))
}

/// Seed for the deck composition and goal-suit draw.
pub fn derive_deck_seed(game_seed: u64) -> u64 {
    derive(game_seed, 1, 0)
}

/// Seed for dealing the initial hands.
pub fn derive_dealing_seed(game_seed: u64) -> u64 {
    derive(game_seed, 2, 0)
}

/// Seed handed to the agent occupying `seat`.
pub fn derive_agent_seed(game_seed: u64, seat: u8) -> u64 {
    derive(game_seed, 3, u64::from(seat))
}

/// Base seed of round `round_no` in a tournament.
pub fn derive_round_seed(tournament_seed: u64, round_no: u32) -> u64 {
    derive(tournament_seed, 4, u64::from(round_no))
}
