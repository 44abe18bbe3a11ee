//! Hazard-aware decision engine for the grid agent.
//!
//! Every tick the [`DecisionEngine`] walks a fixed ladder of tiers over an
//! [`AgentContext`] blackboard and returns the first action set:
//!
//! 1. **Escape firewall**: a firewall pattern is visible, step toward safety
//! 2. **Pursue chest**: open an adjacent chest or walk to the nearest one
//! 3. **Auto-equip**: use the first buff in the inventory
//! 4. **Engage hostile**: step toward the nearest hostile in attack range
//! 5. **Explore**: ground cell, short hop, long hop, or a random phase
//!
//! # Core Components
//!
//! - [`HazardDetector`]: classifies firewall cells into a [`HazardPattern`]
//! - [`ObjectiveLocator`]: chest and fallback-ground scans
//! - [`InventoryPolicy`]: item usage and attack-range checks
//! - [`MovementResolver`]: greedy step with axis fallbacks and phasing
//! - [`ExplorationStrategy`]: never-idle target selection
//! - [`AgentSession`]: cross-tick memory, cleared on a new game

pub mod context;
pub mod exploration;
pub mod hazard;
pub mod inventory;
pub mod movement;
pub mod objective;
pub mod provider;
pub mod scan;
pub mod session;
pub mod tiers;

pub use context::AgentContext;
pub use exploration::ExplorationStrategy;
pub use hazard::{HazardAnalysis, HazardDetector, HazardPattern};
pub use inventory::InventoryPolicy;
pub use movement::MovementResolver;
pub use objective::ObjectiveLocator;
pub use provider::DecisionEngine;
pub use session::AgentSession;
pub use tiers::{Ladder, Status, Tier};
