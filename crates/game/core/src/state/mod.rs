//! World snapshot representation.
//!
//! Snapshots are delivered once per tick by the host and are never mutated by
//! the engine. Cross-tick memory lives in the runtime's session object.
pub mod types;

pub use types::{
    AgentView, GroundBounds, Hostile, InventoryItem, ItemKind, Point, Position, Projectile,
    Structure, WorldSnapshot,
};
