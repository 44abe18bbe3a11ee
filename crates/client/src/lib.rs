//! Headless simulator for the decision engine.
//!
//! Loads a scenario, keeps a small mutable world in sync with the engine's
//! actions, and reports what happened. The binary in `main.rs` wires these
//! pieces to the command line.

pub mod config;
pub mod logging;
pub mod world;

pub use config::SimConfig;
pub use logging::setup_logging;
pub use world::{SimStats, SimWorld};
