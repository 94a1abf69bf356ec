use tracing::info;

use crate::action::{ActionError, ActionTransition, acting_actor};
use crate::env::GameEnv;
use crate::message::{MessageColor, MessageSink};
use crate::state::{EntityId, GameState};

/// Descend to the next floor from the staircase tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TakeStairsAction {
    pub actor: EntityId,
}

impl TakeStairsAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for TakeStairsAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        let position = acting_actor(state, self.actor)?.position;
        if env.map()?.downstairs() != Some(position) {
            return Err(ActionError::impossible("There are no stairs here."));
        }
        env.floors()?;
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        let floor = state.turn.floor + 1;
        env.floors()?.generate_floor(state, floor)?;
        state.turn.floor = floor;

        info!(target: "corridor::world", floor, "descended");
        messages.add_message("You descend the staircase.".to_owned(), MessageColor::Descend);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageLog;
    use crate::state::Position;
    use crate::testing::{NoopFloors, StubMap, player_at};

    #[test]
    fn stairs_only_work_on_the_staircase() {
        let map = StubMap::open(4, 4).with_downstairs(Position::new(3, 3));
        let floors = NoopFloors::default();
        let env = GameEnv::empty().with_map(&map).with_floors(&floors);
        let mut state = GameState::new(player_at(Position::new(1, 1)));
        let mut log = MessageLog::new();

        let err = TakeStairsAction::new(EntityId::PLAYER)
            .perform(&mut state, &env, &mut log)
            .unwrap_err();
        assert_eq!(err.reason(), Some("There are no stairs here."));
        assert_eq!(floors.generated(), 0);

        state.entities.player.position = Position::new(3, 3);
        TakeStairsAction::new(EntityId::PLAYER)
            .perform(&mut state, &env, &mut log)
            .unwrap();
        assert_eq!(state.turn.floor, 1);
        assert_eq!(floors.generated(), 1);
        assert_eq!(log.last().map(|m| m.color), Some(MessageColor::Descend));
    }
}
