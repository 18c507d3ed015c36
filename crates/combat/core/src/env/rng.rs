//! RNG oracle for seeded random number generation.
//!
//! The combat math itself is deterministic; randomness is only used to
//! shuffle decks. Implementations are stateless functions of a seed, so a
//! battle's shuffles are reproducible from its seed and nonce.

/// RNG oracle for seeded random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state, single multiply + xorshift +
/// rotate.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
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

/// Derives the seed for one random event in a battle.
///
/// * `battle_seed` - Base seed fixed at battle creation
/// * `nonce` - Request sequence number of the battle
/// * `actor_id` - Participant whose deck is being shuffled
/// * `context` - Distinguishes several rolls within one request
pub fn compute_seed(battle_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = battle_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(actor_id).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Fisher-Yates shuffle driven by an [`RngOracle`].
pub fn shuffle<T>(rng: &(impl RngOracle + ?Sized), seed: u64, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let roll = rng.range(compute_seed(seed, i as u64, 0, 0), 0, i as u32);
        items.swap(i, roll as usize);
    }
}
