//! Picking up, using, and dropping items.

use crate::action::{ActionError, ActionTransition, acting_actor, held_item};
use crate::env::GameEnv;
use crate::message::{MessageColor, MessageSink};
use crate::state::{EntityId, GameState, ItemLocation, Position};

/// Take the first item lying on the actor's tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickupAction {
    pub actor: EntityId,
}

impl PickupAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }

    fn item(&self, state: &GameState) -> Result<EntityId, ActionError> {
        let actor = acting_actor(state, self.actor)?;
        let item = state
            .items_at(actor.position)
            .next()
            .ok_or_else(|| ActionError::impossible("There is nothing here to take."))?;
        if actor.inventory.is_full() {
            return Err(ActionError::impossible("Your inventory is full."));
        }
        Ok(item.id)
    }
}

impl ActionTransition for PickupAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        self.item(state).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        let item = self.item(state)?;
        state
            .entities
            .relocate_item(item, ItemLocation::InInventory(self.actor))?;
        messages.add_message(
            format!("You took the {}!", state.entities.item_name(item)),
            MessageColor::White,
        );
        Ok(())
    }
}

/// Activate a held item's consumable effect, optionally aimed at `target`.
///
/// Items without a consumable effect do nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAction {
    pub actor: EntityId,
    pub item: EntityId,
    pub target: Option<Position>,
}

impl ItemAction {
    pub fn new(actor: EntityId, item: EntityId, target: Option<Position>) -> Self {
        Self {
            actor,
            item,
            target,
        }
    }
}

impl ActionTransition for ItemAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        acting_actor(state, self.actor)?;
        let item = held_item(state, self.actor, self.item)?;
        if item.consumable.is_some() {
            env.consumables()?;
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        let handle = state
            .entities
            .item(self.item)
            .ok_or(ActionError::ItemNotFound(self.item))?
            .consumable;
        match handle {
            Some(handle) => env
                .consumables()?
                .activate(handle, self, state, messages),
            None => Ok(()),
        }
    }
}

/// Put a held item down on the actor's tile, unequipping it first if needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DropItemAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl DropItemAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for DropItemAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        acting_actor(state, self.actor)?;
        held_item(state, self.actor, self.item).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        let actor = acting_actor(state, self.actor)?;
        let position = actor.position;
        if actor.equipment.is_equipped(self.item) {
            state
                .entities
                .toggle_equip(self.actor, self.item, Some(&mut *messages))?;
        }

        state
            .entities
            .relocate_item(self.item, ItemLocation::OnGround(position))?;
        messages.add_message(
            format!("You dropped the {}.", state.entities.item_name(self.item)),
            MessageColor::White,
        );
        Ok(())
    }
}
