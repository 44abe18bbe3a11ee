//! RNG oracle for seed-driven random choices.
//!
//! Exploration shuffles its candidate pools through this trait so tests can
//! pin the exact candidate selected, while production wiring plugs in an
//! entropy-backed implementation.

/// Seed-driven random source.
///
/// Deterministic implementations must return the same value for the same
/// seed. Entropy-backed implementations may ignore the seed.
pub trait RngOracle {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a die with N sides (1-N inclusive).
    fn roll_die(&self, seed: u64, sides: u32) -> u32 {
        (self.next_u32(seed) % sides) + 1
    }

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let range = max - min + 1;
        min + (self.next_u32(seed) % range)
    }
}

impl<R: RngOracle + ?Sized> RngOracle for &R {
    fn next_u32(&self, seed: u64) -> u32 {
        (**self).next_u32(seed)
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// Stateless PCG-XSH-RR: the seed is the 64-bit state, advanced once per
/// call. Same seed, same output.
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

/// Derive a seed for one random decision.
///
/// * `game_seed` - Base seed fixed for the game session
/// * `tick` - Decision counter within the session
/// * `context` - Distinguishes independent rolls within the same tick
pub fn compute_seed(game_seed: u64, tick: u64, context: u32) -> u64 {
    let mut hash = game_seed;
    hash ^= tick.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Uniform in-place Fisher–Yates shuffle driven by `rng`.
pub fn shuffle<R, T>(rng: &R, seed: u64, items: &mut [T])
where
    R: RngOracle + ?Sized,
{
    for i in (1..items.len()).rev() {
        let roll_seed = compute_seed(seed, i as u64, 0);
        let j = rng.range(roll_seed, 0, i as u32) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic() {
        let rng = PcgRng;
        assert_eq!(rng.next_u32(42), rng.next_u32(42));
        assert_ne!(rng.next_u32(42), rng.next_u32(43));
    }

    #[test]
    fn range_stays_inclusive() {
        let rng = PcgRng;
        for seed in 0..256 {
            let value = rng.range(seed, 3, 5);
            assert!((3..=5).contains(&value));
        }
        assert_eq!(rng.range(7, 9, 9), 9);
    }

    #[test]
    fn shuffle_is_a_permutation_and_repeatable() {
        let mut first: Vec<u32> = (0..12).collect();
        let mut second = first.clone();
        shuffle(&PcgRng, 99, &mut first);
        shuffle(&PcgRng, 99, &mut second);
        assert_eq!(first, second);

        let mut sorted = first.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..12).collect::<Vec<_>>());
    }
}
