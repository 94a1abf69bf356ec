//! Equipment slots for actors.
//!
//! Slots reference items by `EntityId`. The item itself stays in the owner's
//! inventory; the slot is an additional reference kept in sync by
//! `EntitiesState::relocate_item`.

use strum::IntoEnumIterator;

use crate::state::types::{EntitiesState, EntityId, EquipmentType, StatBonus};

/// Items currently equipped by an actor, one per slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    pub melee: Option<EntityId>,
    pub gun: Option<EntityId>,
    pub armor: Option<EntityId>,
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: EquipmentType) -> Option<EntityId> {
        match slot {
            EquipmentType::Melee => self.melee,
            EquipmentType::Gun => self.gun,
            EquipmentType::Armor => self.armor,
        }
    }

    pub(crate) fn slot_mut(&mut self, slot: EquipmentType) -> &mut Option<EntityId> {
        match slot {
            EquipmentType::Melee => &mut self.melee,
            EquipmentType::Gun => &mut self.gun,
            EquipmentType::Armor => &mut self.armor,
        }
    }

    /// Returns the slot holding `item`, if it is equipped.
    pub fn slot_of(&self, item: EntityId) -> Option<EquipmentType> {
        EquipmentType::iter().find(|&slot| self.slot(slot) == Some(item))
    }

    pub fn is_equipped(&self, item: EntityId) -> bool {
        self.slot_of(item).is_some()
    }

    /// Iterates over occupied slots.
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentType, EntityId)> + '_ {
        EquipmentType::iter().filter_map(|slot| self.slot(slot).map(|item| (slot, item)))
    }

    /// Sum of the bonuses of every equipped item, recomputed on each call.
    pub fn bonuses(&self, entities: &EntitiesState) -> StatBonus {
        self.iter()
            .filter_map(|(_, item)| entities.item(item))
            .filter_map(|item| item.equippable.as_ref())
            .map(|gear| gear.bonus)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_lookup_is_per_category() {
        let equipment = Equipment {
            melee: Some(EntityId(3)),
            gun: None,
            armor: Some(EntityId(5)),
        };

        assert_eq!(equipment.slot_of(EntityId(5)), Some(EquipmentType::Armor));
        assert!(!equipment.is_equipped(EntityId(4)));
        assert_eq!(
            equipment.iter().collect::<Vec<_>>(),
            [
                (EquipmentType::Melee, EntityId(3)),
                (EquipmentType::Armor, EntityId(5))
            ]
        );
    }
}
