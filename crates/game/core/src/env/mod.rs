//! Traits describing the capabilities the engine consumes.
//!
//! The host supplies a [`CellOracle`] for cell classification and an
//! [`RngOracle`] for exploration shuffles. Both are narrow so test doubles and
//! production adapters satisfy the same contract.
mod error;
mod map;
mod rng;

pub use error::OracleError;
pub use map::{CellKind, CellOracle};
pub use rng::{PcgRng, RngOracle, compute_seed, shuffle};
