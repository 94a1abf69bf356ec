//! Deterministic turn-resolution rules for Hostile Corridors.
//!
//! `corridor-core` turns a discrete intent (move, attack, shoot, equip) into a
//! validated world mutation. It owns the canonical state types, the combat
//! math, the equipment and consumable-resource lifecycle, and the action sum
//! type. Map storage, field of view, floor generation, and consumable effects
//! are external collaborators reached through the oracles in [`env`].
//!
//! All state mutation flows through [`engine::GameEngine`], and every action
//! either applies fully or fails with no observable change.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod message;
pub mod state;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use action::{
    Action, ActionError, ActionTransition, BumpAction, DropItemAction, EquipAction, ItemAction,
    MeleeAction, MovementAction, PickupAction, RangedAction, TakeStairsAction, UnjamAction,
    WaitAction,
};
pub use config::GameConfig;
pub use engine::{ExecuteError, GameEngine, TransitionPhase};
pub use env::{
    ConsumableOracle, FloorOracle, GameEnv, MapDimensions, MapOracle, OracleError, PcgRng,
    RngOracle, StaticTile, TerrainKind, compute_seed,
};
pub use error::{ErrorSeverity, GameError};
pub use message::{MessageColor, MessageLog, MessageSink};
pub use state::{
    ActorState, AiKind, ConsumableHandle, DerivedStats, EntitiesState, EntityId, EquipChange,
    Equipment, EquipmentType, Equippable, Fighter, GameState, InventoryState, ItemLocation,
    ItemState, Level, Position, StatBlock, StatBonus, StateError, TurnState, WeaponTraits,
};
