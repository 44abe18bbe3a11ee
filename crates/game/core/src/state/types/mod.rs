mod common;
mod item;
mod world;

pub use common::{Point, Position};
pub use item::{InventoryItem, ItemKind, Structure};
pub use world::{AgentView, GroundBounds, Hostile, Projectile, WorldSnapshot};
