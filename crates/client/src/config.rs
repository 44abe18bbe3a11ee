//! Simulator configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

/// Settings that command-line flags may override.
#[derive(Clone, Debug, Default)]
pub struct SimConfig {
    /// Engine tunables file (TOML).
    pub config_path: Option<PathBuf>,
    pub ticks: Option<u64>,
    /// Fixed seed; when set, exploration is repeatable.
    pub seed: Option<u64>,
    pub session_id: Option<String>,
    pub log_dir: Option<PathBuf>,
}

impl SimConfig {
    pub const DEFAULT_TICKS: u64 = 100;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `AGENT_CONFIG` - Path to an engine config TOML (default: built-in defaults)
    /// - `AGENT_TICKS` - Ticks to simulate (default: scenario value, then 100)
    /// - `AGENT_SEED` - Seed for repeatable exploration (default: entropy)
    /// - `AGENT_SESSION_ID` - Log session identifier (default: auto-generated)
    /// - `AGENT_LOG_DIR` - Log root directory (default: platform cache dir)
    pub fn from_env() -> Self {
        Self {
            config_path: env::var("AGENT_CONFIG").ok().map(PathBuf::from),
            ticks: read_env::<u64>("AGENT_TICKS"),
            seed: read_env::<u64>("AGENT_SEED"),
            session_id: env::var("AGENT_SESSION_ID").ok(),
            log_dir: env::var("AGENT_LOG_DIR").ok().map(PathBuf::from),
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
