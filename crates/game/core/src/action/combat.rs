//! Melee and ranged attacks, and clearing a jammed gun.

use tracing::debug;

use crate::action::{ActionError, ActionTransition, acting_actor, attack_color};
use crate::combat::{ShotOutcome, applied_damage, hit_chance, jam_chance, resolve_shot};
use crate::env::{GameEnv, compute_seed};
use crate::message::{MessageSink, capitalize, hit_points};
use crate::state::{DerivedStats, EntityId, EquipmentType, GameState, Position, StateError};

/// Attack the actor standing at `(dx, dy)` with the equipped melee weapon or bare hands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeleeAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl MeleeAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    fn target(&self, state: &GameState) -> Result<EntityId, ActionError> {
        let destination = acting_actor(state, self.actor)?
            .position
            .offset(self.dx, self.dy);
        state
            .actor_at(destination)
            .map(|target| target.id)
            .ok_or_else(|| ActionError::impossible("Nothing to attack."))
    }
}

impl ActionTransition for MeleeAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        self.target(state).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        let target = self.target(state)?;
        let attack = derived(state, self.actor)?.power;
        let defense = derived(state, target)?.defense;
        let damage = applied_damage(attack, defense, env.config());

        let attacker = acting_actor(state, self.actor)?;
        let weapon = attacker.equipment.melee;
        let mut description = format!(
            "{} attacks {}",
            capitalize(&attacker.name),
            actor_name(state, target)?
        );
        if let Some(weapon) = weapon {
            description.push_str(" with ");
            description.push_str(state.entities.item_name(weapon));
        }

        if let Some(weapon) = weapon {
            state.wear_item(weapon, messages)?;
        }
        messages.add_message(
            format!("{description} for {}.", hit_points(damage)),
            attack_color(self.actor),
        );
        state.damage_actor(target, damage, messages)?;
        wear_armor(state, target, messages)?;
        Ok(())
    }
}

/// Fire the equipped gun at the actor on `target` (the shooter's own tile if unset).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangedAction {
    pub actor: EntityId,
    pub target: Option<Position>,
}

/// Everything a validated shot needs.
struct Shot {
    target: EntityId,
    gun: EntityId,
    distance: u32,
}

impl RangedAction {
    pub fn new(actor: EntityId, target: Option<Position>) -> Self {
        Self { actor, target }
    }

    /// Runs every precondition in order, failing on the first that does not hold.
    fn aim(&self, state: &GameState, env: &GameEnv<'_>) -> Result<Shot, ActionError> {
        let shooter = acting_actor(state, self.actor)?;
        let map = env.map()?;
        let target_xy = self.target.unwrap_or(shooter.position);

        let target = state
            .actor_at(target_xy)
            .filter(|target| map.is_visible(target.position))
            .ok_or_else(|| ActionError::impossible("Nothing to attack."))?;
        if target.id == shooter.id {
            return Err(ActionError::impossible(
                "Can't take the easy way out, I have a mission to do.",
            ));
        }

        let gun_id = shooter.equipment.gun.ok_or_else(|| {
            ActionError::impossible("Finger guns can't cause any real damage.")
        })?;
        let gun = state
            .entities
            .item(gun_id)
            .and_then(|item| item.equippable.as_ref())
            .ok_or(StateError::NotEquippable(gun_id))?;
        if gun.ammo() == 0 {
            return Err(ActionError::impossible("You're out of ammo."));
        }
        if gun.is_jammed() {
            return Err(ActionError::impossible("Your gun is jammed!"));
        }

        env.rng()?;
        Ok(Shot {
            target: target.id,
            gun: gun_id,
            distance: shooter.position.chebyshev_distance(target.position),
        })
    }
}

impl ActionTransition for RangedAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        self.aim(state, env).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        let Shot {
            target,
            gun,
            distance,
        } = self.aim(state, env)?;
        let config = env.config();
        let rng = env.rng()?;

        let shooter = derived(state, self.actor)?;
        let defense = derived(state, target)?.defense;
        let gear = state
            .entities
            .item(gun)
            .and_then(|item| item.equippable.as_ref())
            .ok_or(StateError::NotEquippable(gun))?;
        let to_jam = jam_chance(gear, config);
        let to_hit = hit_chance(gear, distance, shooter.accuracy_mult, config);

        let (seed, nonce) = (state.game_seed, state.turn.nonce);
        let outcome = resolve_shot(to_jam, to_hit, |context| {
            rng.unit(compute_seed(seed, nonce, self.actor.0, context))
        });
        debug!(
            target: "corridor::combat",
            actor = %self.actor,
            defender = %target,
            distance,
            to_hit,
            ?outcome,
            "shot resolved"
        );

        let description = format!(
            "{} shoots at the {}",
            capitalize(&acting_actor(state, self.actor)?.name),
            actor_name(state, target)?
        );
        let color = attack_color(self.actor);

        if outcome.spends_ammo() {
            state.spend_ammo(gun)?;
        }
        match outcome {
            ShotOutcome::Jammed => {
                state.jam_gun(gun, messages)?;
            }
            ShotOutcome::Hit => {
                let damage = applied_damage(shooter.ranged_power, defense, config);
                messages.add_message(
                    format!("{description} for {}.", hit_points(damage)),
                    color,
                );
                state.damage_actor(target, damage, messages)?;
                wear_armor(state, target, messages)?;
            }
            ShotOutcome::Miss => {
                messages.add_message(format!("{description} but misses!"), color);
            }
        }
        Ok(())
    }
}

/// Clear a jam from the equipped gun.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnjamAction {
    pub actor: EntityId,
}

impl UnjamAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }

    fn gun(&self, state: &GameState) -> Result<EntityId, ActionError> {
        let gun = acting_actor(state, self.actor)?
            .equipment
            .gun
            .ok_or_else(|| ActionError::impossible("You have no gun to unjam."))?;
        let item = state
            .entities
            .item(gun)
            .ok_or(ActionError::ItemNotFound(gun))?;
        let jammed = item
            .equippable
            .as_ref()
            .is_some_and(|gear| gear.is_jammed());
        if !jammed {
            return Err(ActionError::impossible(format!(
                "Your {} isn't jammed.",
                item.name
            )));
        }
        Ok(gun)
    }
}

impl ActionTransition for UnjamAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        self.gun(state).map(|_| ())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        let gun = self.gun(state)?;
        state.unjam_gun(gun, messages)?;
        Ok(())
    }
}

fn derived(state: &GameState, actor: EntityId) -> Result<DerivedStats, ActionError> {
    state
        .entities
        .derived_stats(actor)
        .ok_or(ActionError::ActorNotFound(actor))
}

fn actor_name(state: &GameState, actor: EntityId) -> Result<String, ActionError> {
    state
        .entities
        .actor(actor)
        .map(|actor| actor.name.clone())
        .ok_or(ActionError::ActorNotFound(actor))
}

/// A defender's armor takes one point of wear from every landed attack.
fn wear_armor(
    state: &mut GameState,
    defender: EntityId,
    messages: &mut dyn MessageSink,
) -> Result<(), ActionError> {
    let armor = state
        .entities
        .actor(defender)
        .and_then(|actor| actor.equipment.slot(EquipmentType::Armor));
    if let Some(armor) = armor {
        state.wear_item(armor, messages)?;
    }
    Ok(())
}
