//! Oracle access errors.

use crate::state::Position;

/// Errors raised by a [`super::CellOracle`] lookup.
///
/// The decision engine never propagates these; every lookup failure is
/// treated as a blocking cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// Position is outside the known ground.
    #[error("position {0} is out of bounds")]
    OutOfBounds(Position),

    /// The oracle has no information for the position.
    #[error("no cell data at {0}")]
    NoData(Position),
}
