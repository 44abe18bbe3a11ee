//! Runtime implementations of the `game-core` capability traits.
//!
//! [`GridOracle`] serves cell classifications from memory (tests, the
//! simulator, replayed captures). [`EntropyRng`] is the production random
//! source for exploration.
mod map;
mod rng;

pub use map::GridOracle;
pub use rng::EntropyRng;
