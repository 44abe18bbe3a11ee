//! Data-driven scenarios and engine configuration.
//!
//! This crate houses static content and provides loaders for RON/TOML files:
//! - Scenarios: a character map of the ground plus the agent, its inventory
//!   and the hostiles in view (RON)
//! - Engine tunables: [`game_core::AgentConfig`] overrides (TOML)
//!
//! Content is turned into oracles and snapshots by the consumer and never
//! reaches the engine directly.

pub mod scenario;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use scenario::{Scenario, ScenarioAgent, ScenarioError};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, ScenarioLoader};
