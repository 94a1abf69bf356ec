//! Traits describing the world collaborators the rules consult.
//!
//! Oracles expose map geometry and visibility, random draws, consumable
//! effects, and floor progression. The [`GameEnv`] aggregate bundles them with
//! the [`GameConfig`] so actions can reach everything they need without hard
//! coupling to concrete implementations.
mod consumable;
mod error;
mod floor;
mod map;
mod rng;

use core::fmt;

pub use consumable::ConsumableOracle;
pub use error::OracleError;
pub use floor::FloorOracle;
pub use map::{MapDimensions, MapOracle, StaticTile, TerrainKind};
pub use rng::{PcgRng, RngOracle, compute_seed, roll};

use crate::config::GameConfig;

static DEFAULT_CONFIG: GameConfig = GameConfig::new();

/// Aggregates the oracles and tunables required by the action layer.
///
/// Every oracle is optional; an action that needs one that is absent fails
/// with a fatal [`OracleError`].
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    map: Option<&'a dyn MapOracle>,
    rng: Option<&'a dyn RngOracle>,
    consumables: Option<&'a dyn ConsumableOracle>,
    floors: Option<&'a dyn FloorOracle>,
    config: &'a GameConfig,
}

impl<'a> GameEnv<'a> {
    pub fn new(
        map: Option<&'a dyn MapOracle>,
        rng: Option<&'a dyn RngOracle>,
        consumables: Option<&'a dyn ConsumableOracle>,
        floors: Option<&'a dyn FloorOracle>,
        config: &'a GameConfig,
    ) -> Self {
        Self {
            map,
            rng,
            consumables,
            floors,
            config,
        }
    }

    /// An environment with no oracles and default tunables.
    pub fn empty() -> Self {
        Self::new(None, None, None, None, &DEFAULT_CONFIG)
    }

    pub fn with_map(mut self, map: &'a dyn MapOracle) -> Self {
        self.map = Some(map);
        self
    }

    pub fn with_rng(mut self, rng: &'a dyn RngOracle) -> Self {
        self.rng = Some(rng);
        self
    }

    pub fn with_consumables(mut self, consumables: &'a dyn ConsumableOracle) -> Self {
        self.consumables = Some(consumables);
        self
    }

    pub fn with_floors(mut self, floors: &'a dyn FloorOracle) -> Self {
        self.floors = Some(floors);
        self
    }

    pub fn with_config(mut self, config: &'a GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the MapOracle, or an error if not available.
    pub fn map(&self) -> Result<&'a dyn MapOracle, OracleError> {
        self.map.ok_or(OracleError::MapNotAvailable)
    }

    /// Returns the RngOracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }

    /// Returns the ConsumableOracle, or an error if not available.
    pub fn consumables(&self) -> Result<&'a dyn ConsumableOracle, OracleError> {
        self.consumables.ok_or(OracleError::ConsumablesNotAvailable)
    }

    /// Returns the FloorOracle, or an error if not available.
    pub fn floors(&self) -> Result<&'a dyn FloorOracle, OracleError> {
        self.floors.ok_or(OracleError::FloorsNotAvailable)
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }
}

impl Default for GameEnv<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for GameEnv<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameEnv")
            .field("map", &self.map.is_some())
            .field("rng", &self.rng.is_some())
            .field("consumables", &self.consumables.is_some())
            .field("floors", &self.floors.is_some())
            .field("config", self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_oracles_are_reported() {
        let env = GameEnv::empty();
        assert_eq!(env.map().err(), Some(OracleError::MapNotAvailable));
        assert_eq!(env.rng().err(), Some(OracleError::RngNotAvailable));
        assert_eq!(env.floors().err(), Some(OracleError::FloorsNotAvailable));
        assert_eq!(env.config(), &GameConfig::default());
    }

    #[test]
    fn builder_installs_oracles() {
        let rng = PcgRng;
        let config = GameConfig::new().with_jam_chance(0.0);
        let env = GameEnv::empty().with_rng(&rng).with_config(&config);
        assert!(env.rng().is_ok());
        assert_eq!(env.config().jam_chance, 0.0);
    }
}
