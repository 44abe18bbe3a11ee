//! Engine configuration loader.

use std::path::Path;

use game_core::AgentConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for [`AgentConfig`] from TOML files.
///
/// Missing keys keep their defaults, so a file only lists what it overrides.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<AgentConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    /// Parse and validate config data from a TOML string.
    pub fn parse(content: &str) -> LoadResult<AgentConfig> {
        let config: AgentConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "chest_scan_radius = 12\ngame_seed = 99").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.chest_scan_radius, 12);
        assert_eq!(config.game_seed, 99);
        assert_eq!(
            config.hazard_scan_radius,
            AgentConfig::DEFAULT_HAZARD_SCAN_RADIUS
        );
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), AgentConfig::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ConfigLoader::parse("ground_scan_radius = 0").unwrap_err();
        assert!(err.to_string().contains("ground_scan_radius"));
    }

    #[test]
    fn oversized_radius_is_rejected() {
        let err = ConfigLoader::parse("chest_scan_radius = 2147483647").unwrap_err();
        assert!(err.to_string().contains("chest_scan_radius must be at most 1000"));
    }

    #[test]
    fn missing_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = ConfigLoader::load(&path).unwrap_err();
        assert!(err.to_string().contains("absent.toml"));
    }
}
