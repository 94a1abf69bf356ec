//! Dense grid map backed by a terrain vector.

use corridor_core::{MapDimensions, MapOracle, Position, StaticTile, TerrainKind};

/// A fully revealed floor layout.
///
/// Visibility is not modelled here: every in-bounds tile counts as visible.
/// Field-of-view belongs to whatever renders the map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridMap {
    dimensions: MapDimensions,
    terrain: Vec<TerrainKind>,
    downstairs: Option<Position>,
}

impl GridMap {
    /// Creates a map filled with a single terrain.
    ///
    /// Staircases are placed with [`GridMap::set`]; filling with
    /// `DownStairs` yields plain floor.
    pub fn filled(dimensions: MapDimensions, terrain: TerrainKind) -> Self {
        let terrain = match terrain {
            TerrainKind::DownStairs => TerrainKind::Floor,
            other => other,
        };
        let len = dimensions.width as usize * dimensions.height as usize;
        Self {
            dimensions,
            terrain: vec![terrain; len],
            downstairs: None,
        }
    }

    /// Floor everywhere, walled in on all four edges.
    pub fn walled(dimensions: MapDimensions) -> Self {
        let mut map = Self::filled(dimensions, TerrainKind::Floor);
        for y in 0..dimensions.height as i32 {
            for x in 0..dimensions.width as i32 {
                let edge = x == 0
                    || y == 0
                    || x == dimensions.width as i32 - 1
                    || y == dimensions.height as i32 - 1;
                if edge {
                    map.set(Position::new(x, y), TerrainKind::Wall);
                }
            }
        }
        map
    }

    /// Overwrites one tile. Out-of-bounds positions are ignored.
    ///
    /// A map has at most one staircase: placing a new one turns the previous
    /// staircase back into floor.
    pub fn set(&mut self, position: Position, terrain: TerrainKind) -> bool {
        let Some(index) = self.index(position) else {
            return false;
        };

        if terrain == TerrainKind::DownStairs {
            if let Some(previous) = self.downstairs.replace(position) {
                if previous != position {
                    self.set(previous, TerrainKind::Floor);
                }
            }
        } else if self.downstairs == Some(position) {
            self.downstairs = None;
        }

        self.terrain[index] = terrain;
        true
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.dimensions.contains(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }
}

impl MapOracle for GridMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        self.index(position)
            .map(|index| StaticTile::new(self.terrain[index]))
    }

    fn is_visible(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    fn downstairs(&self) -> Option<Position> {
        self.downstairs
    }
}
