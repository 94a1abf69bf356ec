//! Entity collections and the item relocation protocol.

use crate::message::{MessageColor, MessageSink};
use crate::state::StateError;

use super::{ActorState, DerivedStats, EntityId, ItemLocation, ItemState, Position};

/// Aggregate state for every entity on the floor.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntitiesState {
    pub player: ActorState,
    pub npcs: Vec<ActorState>,
    /// Every item instance: on the ground, in an inventory, or equipped.
    pub items: Vec<ItemState>,
}

/// Slot changes made by a single `toggle_equip`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EquipChange {
    pub equipped: Option<EntityId>,
    pub unequipped: Option<EntityId>,
}

impl EntitiesState {
    pub fn new(player: ActorState) -> Self {
        Self {
            player,
            npcs: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Returns a reference to an actor by ID (player or NPC).
    pub fn actor(&self, id: EntityId) -> Option<&ActorState> {
        if self.player.id == id {
            return Some(&self.player);
        }
        self.npcs.iter().find(|actor| actor.id == id)
    }

    /// Returns a mutable reference to an actor by ID (player or NPC).
    pub fn actor_mut(&mut self, id: EntityId) -> Option<&mut ActorState> {
        if self.player.id == id {
            return Some(&mut self.player);
        }
        self.npcs.iter_mut().find(|actor| actor.id == id)
    }

    /// Returns an iterator over all actors (player + NPCs).
    pub fn all_actors(&self) -> impl Iterator<Item = &ActorState> {
        std::iter::once(&self.player).chain(self.npcs.iter())
    }

    pub fn item(&self, id: EntityId) -> Option<&ItemState> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn item_mut(&mut self, id: EntityId) -> Option<&mut ItemState> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn contains(&self, id: EntityId) -> bool {
        self.actor(id).is_some() || self.item(id).is_some()
    }

    /// Derived combat stats of an actor: base values plus current equipment bonuses.
    pub fn derived_stats(&self, id: EntityId) -> Option<DerivedStats> {
        let actor = self.actor(id)?;
        Some(actor.fighter.stats.derive(actor.equipment.bonuses(self)))
    }

    /// Adds an NPC to the floor.
    pub fn spawn_npc(&mut self, actor: ActorState) -> Result<(), StateError> {
        if self.contains(actor.id) {
            return Err(StateError::DuplicateEntity(actor.id));
        }
        self.npcs.push(actor);
        Ok(())
    }

    /// Adds an item at `item.location`, registering it with its holder.
    ///
    /// Items spawned as `Equipped` are placed in the owner's inventory first,
    /// then slotted, so the slot invariants are checked the same way as for a
    /// live equip.
    pub fn spawn_item(&mut self, mut item: ItemState) -> Result<(), StateError> {
        let id = item.id;
        if self.contains(id) {
            return Err(StateError::DuplicateEntity(id));
        }

        let target = item.location;
        item.location = ItemLocation::OnGround(Position::ORIGIN);
        self.items.push(item);

        let staged = match target {
            ItemLocation::Equipped { owner, .. } => self
                .relocate_item(id, ItemLocation::InInventory(owner))
                .and_then(|_| self.relocate_item(id, target)),
            _ => self.relocate_item(id, target),
        };

        if let Err(error) = staged {
            // Undo whatever part of the staging succeeded.
            let rollback = self.relocate_item(id, ItemLocation::OnGround(Position::ORIGIN));
            self.items.retain(|item| item.id != id);
            rollback?;
            return Err(error);
        }
        Ok(())
    }

    /// Moves an item between the ground, an inventory, and an equipment slot.
    ///
    /// This is the only operation that changes `ItemState::location`. It keeps
    /// the holder's inventory list and equipment slot in step with the item,
    /// and validates the destination before touching anything:
    ///
    /// - `InInventory(owner)` needs a free inventory slot unless the owner already holds it
    /// - `Equipped { owner, slot }` needs the item in the owner's inventory, of the
    ///   matching type, and an empty slot (unequip the occupant first)
    ///
    /// Returns the previous location.
    pub fn relocate_item(
        &mut self,
        id: EntityId,
        to: ItemLocation,
    ) -> Result<ItemLocation, StateError> {
        let item = self.item(id).ok_or(StateError::UnknownItem(id))?;
        let from = item.location;
        if from == to {
            return Ok(from);
        }

        match to {
            ItemLocation::OnGround(_) => {}
            ItemLocation::InInventory(owner) => {
                let actor = self.actor(owner).ok_or(StateError::UnknownActor(owner))?;
                if !from.is_held_by(owner) && actor.inventory.is_full() {
                    return Err(StateError::InventoryFull { owner });
                }
            }
            ItemLocation::Equipped { owner, slot } => {
                let actor = self.actor(owner).ok_or(StateError::UnknownActor(owner))?;
                if !from.is_held_by(owner) {
                    return Err(StateError::NotHeld { item: id, owner });
                }
                match item.equipment_type() {
                    None => return Err(StateError::NotEquippable(id)),
                    Some(kind) if kind != slot => {
                        return Err(StateError::WrongSlot { item: id, slot });
                    }
                    Some(_) => {}
                }
                if let Some(occupant) = actor.equipment.slot(slot) {
                    if occupant != id {
                        return Err(StateError::SlotOccupied {
                            owner,
                            slot,
                            occupant,
                        });
                    }
                }
            }
        }

        // Detach from the previous holder.
        if let ItemLocation::Equipped { owner, slot } = from {
            if let Some(actor) = self.actor_mut(owner) {
                actor.equipment.slot_mut(slot).take();
            }
        }
        if let Some(owner) = from.holder() {
            if to.holder() != Some(owner) {
                if let Some(actor) = self.actor_mut(owner) {
                    actor.inventory.remove(id);
                }
            }
        }

        // Attach to the new holder.
        if let Some(owner) = to.holder() {
            if from.holder() != Some(owner) {
                let actor = self
                    .actor_mut(owner)
                    .ok_or(StateError::UnknownActor(owner))?;
                if !actor.inventory.insert(id) {
                    return Err(StateError::InventoryFull { owner });
                }
            }
        }
        if let ItemLocation::Equipped { owner, slot } = to {
            if let Some(actor) = self.actor_mut(owner) {
                *actor.equipment.slot_mut(slot) = Some(id);
            }
        }

        if let Some(item) = self.item_mut(id) {
            item.location = to;
        }
        Ok(from)
    }

    /// Removes an item from the world, silently clearing any slot and inventory entry.
    ///
    /// Returns the item if it existed; destroying an absent item is a no-op.
    pub fn destroy_item(&mut self, id: EntityId) -> Option<ItemState> {
        let location = self.item(id)?.location;
        if let Some(owner) = location.holder() {
            if let Some(actor) = self.actor_mut(owner) {
                if let ItemLocation::Equipped { slot, .. } = location {
                    actor.equipment.slot_mut(slot).take();
                }
                actor.inventory.remove(id);
            }
        }
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Equips `item` into its slot, or unequips it if it already occupies that slot.
    ///
    /// A different occupant of the slot is unequipped first. Pass `None` for
    /// `messages` to suppress the equip/remove lines (initial loadout setup).
    pub fn toggle_equip(
        &mut self,
        owner: EntityId,
        item: EntityId,
        mut messages: Option<&mut (dyn MessageSink + '_)>,
    ) -> Result<EquipChange, StateError> {
        let state = self.item(item).ok_or(StateError::UnknownItem(item))?;
        let slot = state
            .equipment_type()
            .ok_or(StateError::NotEquippable(item))?;
        if !state.location.is_held_by(owner) {
            return Err(StateError::NotHeld { item, owner });
        }
        let occupant = self
            .actor(owner)
            .ok_or(StateError::UnknownActor(owner))?
            .equipment
            .slot(slot);

        let mut change = EquipChange::default();

        if let Some(current) = occupant {
            self.unequip(owner, current, messages.as_deref_mut())?;
            change.unequipped = Some(current);
            if current == item {
                return Ok(change);
            }
        }

        self.relocate_item(item, ItemLocation::Equipped { owner, slot })?;
        change.equipped = Some(item);
        if let Some(sink) = messages {
            sink.add_message(
                format!("You equip the {}.", self.item_name(item)),
                MessageColor::White,
            );
        }
        Ok(change)
    }

    fn unequip(
        &mut self,
        owner: EntityId,
        item: EntityId,
        messages: Option<&mut (dyn MessageSink + '_)>,
    ) -> Result<(), StateError> {
        self.relocate_item(item, ItemLocation::InInventory(owner))?;
        if let Some(sink) = messages {
            sink.add_message(
                format!("You remove the {}.", self.item_name(item)),
                MessageColor::White,
            );
        }
        Ok(())
    }

    pub(crate) fn item_name(&self, id: EntityId) -> &str {
        self.item(id).map(|item| item.name.as_str()).unwrap_or("item")
    }

    /// Items lying on the ground at `position`, in spawn order.
    pub fn items_at(&self, position: Position) -> impl Iterator<Item = &ItemState> {
        self.items
            .iter()
            .filter(move |item| item.location == ItemLocation::OnGround(position))
    }
}
