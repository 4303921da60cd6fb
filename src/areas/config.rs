//! Repository configuration
//!
//! The configuration lives in `<metadata>/config` as grouped-section
//! key/value text:
//!
//! ```text
//! [core]
//! repositoryformatversion = 0
//! filemode = false
//! bare = false
//! ```
//!
//! Only format version 0 is understood; opening a repository that declares
//! any other version is refused.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The single repository format version this implementation understands
pub const SUPPORTED_FORMAT_VERSION: u32 = 0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub core: CoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    pub repositoryformatversion: u32,
    pub filemode: bool,
    pub bare: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            core: CoreConfig {
                repositoryformatversion: SUPPORTED_FORMAT_VERSION,
                filemode: false,
                bare: false,
            },
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Unable to read config file {}", path.display()))?;

        toml::from_str(&content)
            .context(format!("Unable to parse config file {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string(self).context("Unable to serialize configuration")?;

        std::fs::write(path, content)
            .context(format!("Unable to write config file {}", path.display()))?;

        Ok(())
    }

    pub fn format_version(&self) -> u32 {
        self.core.repositoryformatversion
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_declares_supported_version() {
        let config = Config::default();

        assert_eq!(config.format_version(), SUPPORTED_FORMAT_VERSION);
        assert!(!config.core.filemode);
        assert!(!config.core.bare);
    }

    #[test]
    fn default_config_serializes_as_core_section() {
        let content = toml::to_string(&Config::default()).unwrap();

        assert!(content.contains("[core]"));
        assert!(content.contains("repositoryformatversion = 0"));
        assert!(content.contains("filemode = false"));
        assert!(content.contains("bare = false"));
    }

    #[test]
    fn config_round_trips_through_text_form() {
        let config = Config::default();
        let content = toml::to_string(&config).unwrap();
        let reparsed: Config = toml::from_str(&content).unwrap();

        assert_eq!(reparsed.format_version(), config.format_version());
        assert_eq!(reparsed.core.filemode, config.core.filemode);
        assert_eq!(reparsed.core.bare, config.core.bare);
    }

    #[test]
    fn foreign_format_version_is_preserved_for_the_gate_check() {
        let content = "[core]\nrepositoryformatversion = 1\nfilemode = false\nbare = false\n";
        let config: Config = toml::from_str(content).unwrap();

        assert_eq!(config.format_version(), 1);
    }
}
