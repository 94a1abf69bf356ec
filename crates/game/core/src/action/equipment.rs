use crate::action::{ActionError, ActionTransition, acting_actor, held_item};
use crate::env::GameEnv;
use crate::message::MessageSink;
use crate::state::{EntityId, GameState};

/// Equip a held item, or take it off if it is already equipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipAction {
    pub actor: EntityId,
    pub item: EntityId,
}

impl EquipAction {
    pub fn new(actor: EntityId, item: EntityId) -> Self {
        Self { actor, item }
    }
}

impl ActionTransition for EquipAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        acting_actor(state, self.actor)?;
        let item = held_item(state, self.actor, self.item)?;
        if item.equippable.is_none() {
            return Err(ActionError::impossible(format!(
                "The {} can't be equipped.",
                item.name
            )));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        state
            .entities
            .toggle_equip(self.actor, self.item, Some(messages))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageLog;
    use crate::state::{ItemLocation, ItemState, Position};
    use crate::testing::{knife, player_at};

    fn held(state: &mut GameState, item: ItemState) -> EntityId {
        let mut item = item;
        item.location = ItemLocation::InInventory(EntityId::PLAYER);
        state.spawn_item(item).unwrap()
    }

    #[test]
    fn equip_twice_empties_the_slot() {
        let mut state = GameState::new(player_at(Position::ORIGIN));
        let blade = held(&mut state, knife(EntityId(10), 15));
        let base = state.entities.derived_stats(EntityId::PLAYER).unwrap().power;
        let env = GameEnv::empty();
        let mut log = MessageLog::new();
        let action = EquipAction::new(EntityId::PLAYER, blade);

        action.perform(&mut state, &env, &mut log).unwrap();
        assert_eq!(state.entities.player.equipment.melee, Some(blade));
        assert_eq!(
            state.entities.derived_stats(EntityId::PLAYER).unwrap().power,
            base + 4
        );

        action.perform(&mut state, &env, &mut log).unwrap();
        assert_eq!(state.entities.player.equipment.melee, None);
        assert_eq!(
            state.entities.derived_stats(EntityId::PLAYER).unwrap().power,
            base
        );
        assert_eq!(
            log.texts().collect::<Vec<_>>(),
            ["You equip the Knife.", "You remove the Knife."]
        );
    }

    #[test]
    fn plain_items_cannot_be_equipped() {
        let mut state = GameState::new(player_at(Position::ORIGIN));
        let kit = held(
            &mut state,
            ItemState::new(EntityId(10), "Medkit", ItemLocation::OnGround(Position::ORIGIN)),
        );
        let err = EquipAction::new(EntityId::PLAYER, kit)
            .perform(&mut state, &GameEnv::empty(), &mut MessageLog::new())
            .unwrap_err();
        assert_eq!(err.reason(), Some("The Medkit can't be equipped."));
    }
}
