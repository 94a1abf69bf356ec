//! Game configuration loader.

use std::path::Path;

use corridor_core::GameConfig;
use tracing::info;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config: GameConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(0.0..=1.0).contains(&config.jam_chance) {
            anyhow::bail!(
                "jam_chance must be within [0, 1], got {} in {}",
                config.jam_chance,
                path.display()
            );
        }

        info!(target: "corridor::content", path = %path.display(), "loaded game config");
        Ok(config)
    }
}
