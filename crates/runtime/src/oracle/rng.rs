//! Entropy-backed random source for production wiring.
use game_core::RngOracle;
use rand::RngCore;

/// [`RngOracle`] drawing from the thread-local OS-seeded generator.
///
/// The seed argument is ignored; use [`game_core::PcgRng`] when repeatable
/// choices are needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct EntropyRng;

impl RngOracle for EntropyRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        rand::thread_rng().next_u32()
    }
}
