//! Action domain.
//!
//! The engine emits exactly one [`Action`] per tick. Transport of the action
//! (and the meaning of `Phase`/`OpenChest` on the server) belongs to the
//! host's action sink.
pub mod movement;
pub mod types;

pub use movement::CardinalDirection;
pub use types::{Action, ItemTarget, ItemUse};
