//! Health and gear-resource transitions.
//!
//! These are the only places that kill an actor or break, jam, or drain a
//! piece of gear. Each transition writes its player-facing line to the
//! message sink and leaves a `debug!` trace.

use tracing::debug;

use crate::message::{MessageColor, MessageSink, capitalize};

use super::{EntityId, GameState, ItemState, StateError, Wear};

impl GameState {
    /// Applies `amount` damage to an actor and runs the die transition if hp reaches zero.
    ///
    /// Returns true only for the call that killed the actor. Damage to an actor
    /// that is already dead moves nothing and never re-runs the transition.
    pub fn damage_actor(
        &mut self,
        id: EntityId,
        amount: u32,
        messages: &mut dyn MessageSink,
    ) -> Result<bool, StateError> {
        let actor = self
            .entities
            .actor_mut(id)
            .ok_or(StateError::UnknownActor(id))?;
        if !actor.alive {
            return Ok(false);
        }

        if !actor.fighter.take_damage(amount) {
            return Ok(false);
        }

        self.die(id, messages)?;
        Ok(true)
    }

    /// Restores hp up to the maximum. Returns the amount actually recovered.
    ///
    /// Corpses stay dead: healing one recovers nothing.
    pub fn heal_actor(&mut self, id: EntityId, amount: u32) -> Result<u32, StateError> {
        let actor = self
            .entities
            .actor_mut(id)
            .ok_or(StateError::UnknownActor(id))?;
        if !actor.alive {
            return Ok(0);
        }
        Ok(actor.fighter.heal(amount))
    }

    fn die(&mut self, id: EntityId, messages: &mut dyn MessageSink) -> Result<(), StateError> {
        let actor = self
            .entities
            .actor_mut(id)
            .ok_or(StateError::UnknownActor(id))?;

        let (text, color) = if actor.is_player() {
            ("You died!".to_owned(), MessageColor::PlayerDie)
        } else {
            (
                format!("{} is dead!", capitalize(&actor.name)),
                MessageColor::EnemyDie,
            )
        };

        actor.alive = false;
        actor.blocks_movement = false;
        actor.ai = None;
        actor.name = format!("remains of {}", actor.name);
        let xp = if actor.is_player() {
            0
        } else {
            actor.level.xp_given
        };

        debug!(target: "corridor::lifecycle", actor = %id, xp, "actor died");
        messages.add_message(text, color);

        if xp > 0 {
            self.entities.player.level.add_xp(xp, messages);
        }
        Ok(())
    }

    /// Wears a held item down by one use, breaking it on its last point.
    ///
    /// Returns true if the item broke.
    pub fn wear_item(
        &mut self,
        item: EntityId,
        messages: &mut dyn MessageSink,
    ) -> Result<bool, StateError> {
        let gear = self
            .entities
            .item_mut(item)
            .and_then(|state| state.equippable.as_mut())
            .ok_or(StateError::NotEquippable(item))?;

        match gear.wear() {
            Wear::Worn { remaining } => {
                debug!(target: "corridor::lifecycle", item = %item, remaining, "item worn");
                Ok(false)
            }
            Wear::Broken => Ok(self.break_equippable(item, messages).is_some()),
        }
    }

    /// Removes a held item from its owner's inventory and slot and announces the breakage.
    ///
    /// The slot is cleared without a "remove" message. Items that are not held
    /// (already broken, or on the ground) are left alone, so a second call is a no-op.
    pub fn break_equippable(
        &mut self,
        item: EntityId,
        messages: &mut dyn MessageSink,
    ) -> Option<ItemState> {
        let owner = self.entities.item(item)?.location.holder()?;
        let broken = self.entities.destroy_item(item)?;

        debug!(target: "corridor::lifecycle", item = %item, owner = %owner, "item broke");
        messages.add_message(
            format!("Your {} breaks!", broken.name),
            MessageColor::Warning,
        );
        Some(broken)
    }

    /// Spends one round from a gun.
    pub fn spend_ammo(&mut self, gun: EntityId) -> Result<u32, StateError> {
        let gear = self
            .entities
            .item_mut(gun)
            .and_then(|state| state.equippable.as_mut())
            .ok_or(StateError::NotEquippable(gun))?;
        gear.decrement_ammo();
        Ok(gear.ammo())
    }

    /// Jams a gun and warns its owner.
    pub fn jam_gun(
        &mut self,
        gun: EntityId,
        messages: &mut dyn MessageSink,
    ) -> Result<(), StateError> {
        let state = self
            .entities
            .item_mut(gun)
            .ok_or(StateError::UnknownItem(gun))?;
        let gear = state
            .equippable
            .as_mut()
            .ok_or(StateError::NotEquippable(gun))?;
        gear.jam();

        debug!(target: "corridor::lifecycle", item = %gun, "gun jammed");
        messages.add_message(
            format!("Your {} jams!", state.name),
            MessageColor::Warning,
        );
        Ok(())
    }

    /// Clears a jam. Returns false, with no message, when the gun was not jammed.
    pub fn unjam_gun(
        &mut self,
        gun: EntityId,
        messages: &mut dyn MessageSink,
    ) -> Result<bool, StateError> {
        let state = self
            .entities
            .item_mut(gun)
            .ok_or(StateError::UnknownItem(gun))?;
        let gear = state
            .equippable
            .as_mut()
            .ok_or(StateError::NotEquippable(gun))?;
        if !gear.unjam() {
            return Ok(false);
        }

        messages.add_message(
            format!("You carefully unjam your {}.", state.name),
            MessageColor::White,
        );
        Ok(true)
    }
}
