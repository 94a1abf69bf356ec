//! Map data loader.
//!
//! Loads pure terrain data from map RON files. Entities are placed
//! separately through the spawner.

use std::path::Path;

use corridor_core::{MapDimensions, Position, TerrainKind};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::loaders::{LoadResult, read_file};
use crate::map::GridMap;

/// Map data structure for RON files (terrain only).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MapDataRon {
    dimensions: (u32, u32),
    #[serde(default)]
    walled: bool,
    tiles: Vec<(i32, i32, TerrainKind)>, // (x, y, terrain)
}

/// Loader for map data from RON files.
pub struct MapLoader;

impl MapLoader {
    /// Load map data from a RON file.
    ///
    /// The map starts as floor (ringed by walls when `walled` is set) and the
    /// listed tiles are applied on top, in order.
    pub fn load(path: &Path) -> LoadResult<GridMap> {
        let content = read_file(path)?;
        let data: MapDataRon = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse map {}: {}", path.display(), e))?;

        let dimensions = MapDimensions::new(data.dimensions.0, data.dimensions.1);
        let mut map = if data.walled {
            GridMap::walled(dimensions)
        } else {
            GridMap::filled(dimensions, TerrainKind::Floor)
        };

        for (x, y, terrain) in data.tiles {
            if !map.set(Position::new(x, y), terrain) {
                anyhow::bail!(
                    "Tile ({}, {}) lies outside the {}x{} map in {}",
                    x,
                    y,
                    dimensions.width,
                    dimensions.height,
                    path.display()
                );
            }
        }

        info!(
            target: "corridor::content",
            path = %path.display(),
            width = dimensions.width,
            height = dimensions.height,
            "loaded map"
        );
        Ok(map)
    }
}
