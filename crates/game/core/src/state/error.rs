//! State management errors.
//!
//! These errors mean an item-location or entity invariant would be broken.
//! Actions validate before mutating, so reaching one of these from an action
//! is a bug rather than a player-facing failure.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, EquipmentType};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// No actor with this id exists.
    #[error("actor {0} does not exist")]
    UnknownActor(EntityId),

    /// No item with this id exists.
    #[error("item {0} does not exist")]
    UnknownItem(EntityId),

    /// The entity id is already in use.
    #[error("entity id {0} is already in use")]
    DuplicateEntity(EntityId),

    /// The destination inventory has no free slot.
    #[error("inventory of {owner} is full")]
    InventoryFull { owner: EntityId },

    /// An item can only be equipped from its owner's inventory.
    #[error("item {item} is not held by {owner}")]
    NotHeld { item: EntityId, owner: EntityId },

    /// The item has no equippable component.
    #[error("item {0} is not equippable")]
    NotEquippable(EntityId),

    /// The item belongs to another slot.
    #[error("item {item} cannot go in the {slot} slot")]
    WrongSlot { item: EntityId, slot: EquipmentType },

    /// The slot must be emptied explicitly before another item takes it.
    #[error("{slot} slot of {owner} is occupied by {occupant}")]
    SlotOccupied {
        owner: EntityId,
        slot: EquipmentType,
        occupant: EntityId,
    },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            UnknownActor(_) | UnknownItem(_) | DuplicateEntity(_) => ErrorSeverity::Validation,
            InventoryFull { .. }
            | NotHeld { .. }
            | NotEquippable(_)
            | WrongSlot { .. }
            | SlotOccupied { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            UnknownActor(_) => "STATE_UNKNOWN_ACTOR",
            UnknownItem(_) => "STATE_UNKNOWN_ITEM",
            DuplicateEntity(_) => "STATE_DUPLICATE_ENTITY",
            InventoryFull { .. } => "STATE_INVENTORY_FULL",
            NotHeld { .. } => "STATE_NOT_HELD",
            NotEquippable(_) => "STATE_NOT_EQUIPPABLE",
            WrongSlot { .. } => "STATE_WRONG_SLOT",
            SlotOccupied { .. } => "STATE_SLOT_OCCUPIED",
        }
    }
}
