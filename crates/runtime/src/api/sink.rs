//! Outbound half of the tick loop.
//!
//! The host plugs in an [`ActionSink`] that ships each decided action to the
//! game server. What `Phase` or `OpenChest` mean on the wire is the sink's
//! business, not the engine's.
use game_core::Action;

use super::errors::SinkError;

/// Accepts exactly one action per tick.
pub trait ActionSink {
    fn submit(&mut self, action: Action) -> Result<(), SinkError>;
}

impl<S: ActionSink + ?Sized> ActionSink for &mut S {
    fn submit(&mut self, action: Action) -> Result<(), SinkError> {
        (**self).submit(action)
    }
}

/// Sink that keeps every submitted action in order.
///
/// Used by tests and the headless simulator.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    actions: Vec<Action>,
    closed: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn last(&self) -> Option<&Action> {
        self.actions.last()
    }

    /// Refuse all further submissions.
    pub fn close(&mut self) {
        self.closed = true;
    }
}

impl ActionSink for RecordingSink {
    fn submit(&mut self, action: Action) -> Result<(), SinkError> {
        if self.closed {
            return Err(SinkError::Closed);
        }
        self.actions.push(action);
        Ok(())
    }
}
