//! RNG oracle for deterministic random number generation.
//!
//! All RNG implementations must be deterministic: given the same seed, they
//! produce the same value. Combat rolls derive their seed from the session
//! seed, the action nonce, the actor, and a roll context, so replaying a
//! session with the same seed reproduces every jam and hit.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform draw in `[0, 1)`.
    fn unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (f64::from(u32::MAX) + 1.0)
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
///
/// Each call is a single step from the given seed, so the generator itself
/// carries no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Roll contexts for the draws a single action may take.
///
/// A ranged attack draws `JAM` first and `HIT` only if the gun did not jam.
pub mod roll {
    pub const JAM: u32 = 0;
    pub const HIT: u32 = 1;
}

/// Compute a deterministic seed from game state components.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at game start
/// * `nonce` - Action sequence number (increments each resolved action)
/// * `actor_id` - Entity performing the action
/// * `context` - Distinguishes independent rolls within one action (see [`roll`])
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(actor_id).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
