//! Public runtime API surface.
//!
//! This module gathers the types exposed to hosts embedding the engine: the
//! outbound action sink and the error types.

pub mod errors;
pub mod sink;

pub use errors::{Result, RuntimeError, SinkError};
pub use sink::{ActionSink, RecordingSink};
