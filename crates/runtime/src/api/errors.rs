//! Unified error types surfaced by the runtime API.
//!
//! The decision engine itself never fails; errors only arise at the edges:
//! rejecting a bad configuration up front, or an action sink that can no
//! longer deliver.
use thiserror::Error;

use game_core::ConfigError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("invalid agent configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Failures reported by an [`super::ActionSink`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SinkError {
    #[error("action sink closed")]
    Closed,

    #[error("action rejected: {reason}")]
    Rejected { reason: String },
}
