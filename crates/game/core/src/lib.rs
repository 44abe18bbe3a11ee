//! Domain types and capabilities shared across the agent workspace.
//!
//! `game-core` defines what the decision engine reads (world snapshots, cell
//! classifications) and what it emits ([`Action`]). It has no behaviour of
//! its own beyond geometry helpers; the engine lives in the `runtime` crate
//! and consumes the oracle traits re-exported here.
pub mod action;
pub mod config;
pub mod env;
pub mod geometry;
pub mod state;

pub use action::{Action, CardinalDirection, ItemTarget, ItemUse};
pub use config::{AgentConfig, ConfigError};
pub use env::{CellKind, CellOracle, OracleError, PcgRng, RngOracle, compute_seed, shuffle};
pub use geometry::{cardinal_toward, closest, distance, manhattan, step_toward};
pub use state::{
    AgentView, GroundBounds, Hostile, InventoryItem, ItemKind, Point, Position, Projectile,
    Structure, WorldSnapshot,
};
