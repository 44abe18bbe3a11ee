//! Content loaders for reading scenario and configuration files.
//!
//! Scenarios are RON, engine configuration is TOML. Both map straight onto
//! the types in [`crate::scenario`] and [`game_core::AgentConfig`].

pub mod config;
pub mod scenario;

pub use config::ConfigLoader;
pub use scenario::ScenarioLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
