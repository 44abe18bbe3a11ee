//! Runtime for the hazard-aware grid agent.
//!
//! This crate wires the decision engine, in-memory oracles, and the outbound
//! action sink into a per-game driver. Hosts embed [`AgentRuntime`] and feed
//! it one [`game_core::WorldSnapshot`] per tick.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the per-game driver
//! - [`api`] exposes the sink trait and error types hosts interact with
//! - [`providers`] contains the decision engine and its tiers
//! - [`oracle`] provides capability implementations reused by other crates
pub mod api;
pub mod oracle;
pub mod providers;
pub mod runtime;

pub use api::{ActionSink, RecordingSink, Result, RuntimeError, SinkError};
pub use oracle::{EntropyRng, GridOracle};
pub use providers::ai::{AgentSession, HazardAnalysis, HazardPattern};
pub use providers::DecisionEngine;
pub use runtime::AgentRuntime;
