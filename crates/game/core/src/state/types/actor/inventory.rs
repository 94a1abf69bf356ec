//! Inventory storage for actors.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::state::types::EntityId;

/// Items held by an actor, in pickup order.
///
/// Equipped items stay listed here; equipment slots only reference them.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventoryState {
    capacity: u8,
    items: ArrayVec<EntityId, { GameConfig::MAX_INVENTORY_SLOTS }>,
}

impl InventoryState {
    /// Creates an empty inventory. Capacity is capped at `MAX_INVENTORY_SLOTS`.
    pub fn with_capacity(capacity: u8) -> Self {
        Self {
            capacity: capacity.min(GameConfig::MAX_INVENTORY_SLOTS as u8),
            items: ArrayVec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity as usize
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity()
    }

    pub fn contains(&self, item: EntityId) -> bool {
        self.items.contains(&item)
    }

    pub fn items(&self) -> &[EntityId] {
        &self.items
    }

    /// Appends an item. Returns false when the inventory is at capacity.
    pub(crate) fn insert(&mut self, item: EntityId) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.try_push(item).is_ok()
    }

    /// Removes an item, keeping the order of the rest.
    pub(crate) fn remove(&mut self, item: EntityId) -> bool {
        match self.items.iter().position(|&held| held == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}
