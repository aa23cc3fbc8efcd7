//! Deterministic random numbers for enemy behaviour.
//!
//! The engine keeps no RNG state between turns. Each roll derives a fresh
//! seed from the config seed, the level counter and the enemy id, so the same
//! session replays identically from the same inputs.

/// PCG-XSH-RR step: 64-bit LCG state, 32-bit permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Returns the 32-bit output for `seed`.
    pub fn next_u32(seed: u64) -> u32 {
        let state = seed
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);

        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    /// Returns a value in `0..bound`. `bound` of zero yields zero.
    pub fn below(seed: u64, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        Self::next_u32(seed) % bound
    }
}

/// Mixes the session seed, level and actor into a per-roll seed.
pub fn compute_seed(game_seed: u64, level: u64, actor: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= level.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor as u64).wrapping_mul(0x517cc1b727220a95);

    // SplitMix64 finalizer
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
