//! Action domain.
//!
//! An [`Action`] is a single-use command: an actor plus the parameters its
//! variant needs. Each variant implements [`ActionTransition`], which splits
//! resolution into a read-only `pre_validate` that checks every precondition
//! and an `apply` that performs the mutation and reports to the message sink.
//!
//! # Module Structure
//!
//! - `error`: ActionError, the recoverable `Impossible` kind plus defect kinds
//! - `movement`: Movement, Bump, Wait
//! - `combat`: Melee, Ranged, Unjam
//! - `inventory`: Pickup, UseItem, Drop
//! - `equipment`: Equip
//! - `interact`: TakeStairs

pub mod combat;
pub mod equipment;
pub mod error;
pub mod interact;
pub mod inventory;
pub mod movement;

pub use combat::{MeleeAction, RangedAction, UnjamAction};
pub use equipment::EquipAction;
pub use error::ActionError;
pub use interact::TakeStairsAction;
pub use inventory::{DropItemAction, ItemAction, PickupAction};
pub use movement::{BumpAction, MovementAction, WaitAction};

use crate::env::GameEnv;
use crate::message::{MessageColor, MessageSink};
use crate::state::{ActorState, EntityId, GameState, ItemState};

/// Defines how a concrete action variant mutates game state.
///
/// `pre_validate` must reject every failing precondition with
/// `ActionError::Impossible` while the state is still untouched. `apply` may
/// assume it ran successfully.
pub trait ActionTransition {
    /// Returns the entity performing this action.
    fn actor(&self) -> EntityId;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError>;

    /// Validates, then applies.
    fn perform(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        self.pre_validate(state, env)?;
        self.apply(state, env, messages)
    }
}

/// Every command an actor can issue.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    Wait(WaitAction),
    TakeStairs(TakeStairsAction),
    Move(MovementAction),
    Bump(BumpAction),
    Melee(MeleeAction),
    Ranged(RangedAction),
    Pickup(PickupAction),
    UseItem(ItemAction),
    Drop(DropItemAction),
    Equip(EquipAction),
    Unjam(UnjamAction),
}

impl Action {
    /// Stable snake_case name of the variant, for logs.
    pub fn name(&self) -> &'static str {
        self.into()
    }

    fn transition(&self) -> &dyn ActionTransition {
        match self {
            Action::Wait(action) => action,
            Action::TakeStairs(action) => action,
            Action::Move(action) => action,
            Action::Bump(action) => action,
            Action::Melee(action) => action,
            Action::Ranged(action) => action,
            Action::Pickup(action) => action,
            Action::UseItem(action) => action,
            Action::Drop(action) => action,
            Action::Equip(action) => action,
            Action::Unjam(action) => action,
        }
    }
}

impl ActionTransition for Action {
    fn actor(&self) -> EntityId {
        self.transition().actor()
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        self.transition().pre_validate(state, env)
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        self.transition().apply(state, env, messages)
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Action {
                fn from(action: $ty) -> Self {
                    Action::$variant(action)
                }
            }
        )*
    };
}

impl_from_variant!(
    Wait(WaitAction),
    TakeStairs(TakeStairsAction),
    Move(MovementAction),
    Bump(BumpAction),
    Melee(MeleeAction),
    Ranged(RangedAction),
    Pickup(PickupAction),
    UseItem(ItemAction),
    Drop(DropItemAction),
    Equip(EquipAction),
    Unjam(UnjamAction),
);

/// Looks up the acting actor and rejects corpses.
pub(crate) fn acting_actor(state: &GameState, id: EntityId) -> Result<&ActorState, ActionError> {
    let actor = state
        .entities
        .actor(id)
        .ok_or(ActionError::ActorNotFound(id))?;
    if !actor.alive {
        return Err(ActionError::ActorDead(id));
    }
    Ok(actor)
}

/// Looks up an item the actor must be holding.
pub(crate) fn held_item(
    state: &GameState,
    actor: EntityId,
    item: EntityId,
) -> Result<&ItemState, ActionError> {
    state
        .entities
        .item(item)
        .filter(|held| held.location.is_held_by(actor))
        .ok_or_else(|| ActionError::impossible("You don't have that item."))
}

pub(crate) fn attack_color(attacker: EntityId) -> MessageColor {
    if attacker.is_player() {
        MessageColor::PlayerAttack
    } else {
        MessageColor::EnemyAttack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Position;

    #[test]
    fn action_names_are_snake_case() {
        let unjam = Action::from(UnjamAction::new(EntityId::PLAYER));
        assert_eq!(unjam.name(), "unjam");
        let stairs = Action::from(TakeStairsAction::new(EntityId::PLAYER));
        assert_eq!(stairs.name(), "take_stairs");
        let ranged = Action::from(RangedAction::new(EntityId(4), Some(Position::ORIGIN)));
        assert_eq!(ranged.actor(), EntityId(4));
    }
}
