//! Action providers.

pub mod ai;

pub use ai::DecisionEngine;
