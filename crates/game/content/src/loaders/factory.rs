//! Content factory for building sessions from data files.

use std::path::{Path, PathBuf};

use corridor_core::GameConfig;

use crate::catalog::Catalog;
use crate::loaders::{ActorLoader, ConfigLoader, ItemLoader, LoadResult, MapLoader};
use crate::map::GridMap;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// ├── actors.ron
/// └── maps/
///     └── corridor.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load both catalogs (`items.ron` and `actors.ron`) into one [`Catalog`].
    pub fn load_catalog(&self) -> LoadResult<Catalog> {
        let items = ItemLoader::load(&self.data_dir.join("items.ron"))?;
        let actors = ActorLoader::load(&self.data_dir.join("actors.ron"))?;
        Ok(Catalog::from_parts(items, actors))
    }

    /// Load a map from `maps/{map_name}.ron`.
    pub fn load_map(&self, map_name: &str) -> LoadResult<GridMap> {
        let path = self.data_dir.join("maps").join(format!("{}.ron", map_name));
        MapLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
