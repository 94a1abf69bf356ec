//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and turns it into live entities:
//! - Item templates (equipment presets, consumable handles)
//! - Actor templates (player and monster stat lines)
//! - Grid maps implementing the core `MapOracle`
//! - Game configuration (data-driven via TOML)
//!
//! Templates are consumed by the [`Spawner`] and never appear in game state
//! themselves; only the entities built from them do.

pub mod catalog;
pub mod map;
pub mod spawner;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{ActorTemplate, Catalog, GearTemplate, ItemTemplate};
pub use map::GridMap;
pub use spawner::{PLAYER_TEMPLATE, STARTING_LOADOUT, SpawnError, Spawner};

#[cfg(feature = "loaders")]
pub use loaders::{ActorLoader, ConfigLoader, ContentFactory, ItemLoader, MapLoader};
