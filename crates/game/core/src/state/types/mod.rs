pub mod actor;
pub mod common;
pub mod entities;
pub mod item;

// Re-export all actor-related types
pub use actor::{
    // Main actor state
    ActorState,
    AiKind,
    // Combat
    DerivedStats,
    // Equipment
    Equipment,
    Fighter,
    // Inventory
    InventoryState,
    // Progression
    Level,
    StatBlock,
};

pub use common::{EntityId, Position};
pub use entities::{EntitiesState, EquipChange};
pub use item::{
    ConsumableHandle, EquipmentType, Equippable, ItemLocation, ItemState, StatBonus, WeaponTraits,
    Wear,
};
