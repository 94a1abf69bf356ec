use crate::action::{ActionError, ActionTransition, MeleeAction, acting_actor};
use crate::env::GameEnv;
use crate::message::MessageSink;
use crate::state::{EntityId, GameState, Position};

const BLOCKED: &str = "That way is blocked.";

/// Step by `(dx, dy)` onto a free, walkable tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MovementAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

impl MovementAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }
}

impl ActionTransition for MovementAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        let origin = acting_actor(state, self.actor)?.position;
        let destination = origin.offset(self.dx, self.dy);
        let map = env.map()?;

        // Bounds, terrain, and occupants all collapse into the same outcome.
        if !map.in_bounds(destination)
            || !map.is_walkable(destination)
            || state.blocking_entity_at(destination).is_some()
        {
            return Err(ActionError::impossible(BLOCKED));
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        _messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        let actor = state
            .entities
            .actor_mut(self.actor)
            .ok_or(ActionError::ActorNotFound(self.actor))?;
        actor.position = actor.position.offset(self.dx, self.dy);
        Ok(())
    }
}

/// Directional input: attack whoever stands at the destination, otherwise walk there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BumpAction {
    pub actor: EntityId,
    pub dx: i32,
    pub dy: i32,
}

/// What a bump resolves to against the current state.
enum Bump {
    Melee(MeleeAction),
    Move(MovementAction),
}

impl BumpAction {
    pub fn new(actor: EntityId, dx: i32, dy: i32) -> Self {
        Self { actor, dx, dy }
    }

    fn resolve(&self, state: &GameState) -> Result<Bump, ActionError> {
        let destination: Position = acting_actor(state, self.actor)?
            .position
            .offset(self.dx, self.dy);
        Ok(if state.actor_at(destination).is_some() {
            Bump::Melee(MeleeAction::new(self.actor, self.dx, self.dy))
        } else {
            Bump::Move(MovementAction::new(self.actor, self.dx, self.dy))
        })
    }
}

impl ActionTransition for BumpAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, env: &GameEnv<'_>) -> Result<(), ActionError> {
        match self.resolve(state)? {
            Bump::Melee(action) => action.pre_validate(state, env),
            Bump::Move(action) => action.pre_validate(state, env),
        }
    }

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        match self.resolve(state)? {
            Bump::Melee(action) => action.apply(state, env, messages),
            Bump::Move(action) => action.apply(state, env, messages),
        }
    }
}

/// Pass the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction {
    pub actor: EntityId,
}

impl WaitAction {
    pub fn new(actor: EntityId) -> Self {
        Self { actor }
    }
}

impl ActionTransition for WaitAction {
    fn actor(&self) -> EntityId {
        self.actor
    }

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), ActionError> {
        acting_actor(state, self.actor).map(|_| ())
    }

    fn apply(
        &self,
        _state: &mut GameState,
        _env: &GameEnv<'_>,
        _messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageLog;
    use crate::testing::{StubMap, grunt_at, player_at};

    fn setup() -> (GameState, StubMap) {
        let state = GameState::new(player_at(Position::new(2, 2)));
        let map = StubMap::open(5, 5).with_wall(Position::new(3, 2));
        (state, map)
    }

    #[test]
    fn moves_onto_free_floor() {
        let (mut state, map) = setup();
        let env = GameEnv::empty().with_map(&map);
        let mut log = MessageLog::new();

        MovementAction::new(EntityId::PLAYER, 0, 1)
            .perform(&mut state, &env, &mut log)
            .unwrap();
        assert_eq!(state.entities.player.position, Position::new(2, 3));
        assert!(log.is_empty());
    }

    #[test]
    fn walls_edges_and_actors_all_block() {
        let (mut state, map) = setup();
        state.spawn_actor(grunt_at(EntityId(1), Position::new(1, 2))).unwrap();
        state.entities.player.position = Position::new(2, 0);
        let env = GameEnv::empty().with_map(&map);
        let mut log = MessageLog::new();
        let before = state.clone();

        // Off the top edge.
        let err = MovementAction::new(EntityId::PLAYER, 0, -1)
            .perform(&mut state, &env, &mut log)
            .unwrap_err();
        assert_eq!(err.reason(), Some(BLOCKED));
        assert_eq!(state, before);

        state.entities.player.position = Position::new(2, 2);
        let before = state.clone();
        for (dx, dy) in [(1, 0), (-1, 0)] {
            let err = MovementAction::new(EntityId::PLAYER, dx, dy)
                .perform(&mut state, &env, &mut log)
                .unwrap_err();
            assert_eq!(err.reason(), Some(BLOCKED));
        }
        assert_eq!(state, before);
        assert!(log.is_empty());
    }

    #[test]
    fn bump_attacks_occupant_and_walks_otherwise() {
        let (mut state, map) = setup();
        state.spawn_actor(grunt_at(EntityId(1), Position::new(1, 2))).unwrap();
        let env = GameEnv::empty().with_map(&map);
        let mut log = MessageLog::new();

        BumpAction::new(EntityId::PLAYER, -1, 0)
            .perform(&mut state, &env, &mut log)
            .unwrap();
        assert_eq!(state.entities.player.position, Position::new(2, 2));
        assert!(state.entities.actor(EntityId(1)).unwrap().fighter.hp() < 10);

        BumpAction::new(EntityId::PLAYER, 0, -1)
            .perform(&mut state, &env, &mut log)
            .unwrap();
        assert_eq!(state.entities.player.position, Position::new(2, 1));
    }

    #[test]
    fn corpses_do_not_block() {
        let (mut state, map) = setup();
        let mut corpse = grunt_at(EntityId(1), Position::new(2, 3));
        corpse.alive = false;
        corpse.blocks_movement = false;
        state.spawn_actor(corpse).unwrap();
        let env = GameEnv::empty().with_map(&map);

        BumpAction::new(EntityId::PLAYER, 0, 1)
            .perform(&mut state, &env, &mut MessageLog::new())
            .unwrap();
        assert_eq!(state.entities.player.position, Position::new(2, 3));
    }

    #[test]
    fn dead_actors_cannot_act() {
        let (mut state, map) = setup();
        state.entities.player.alive = false;
        let env = GameEnv::empty().with_map(&map);
        let err = WaitAction::new(EntityId::PLAYER)
            .perform(&mut state, &env, &mut MessageLog::new())
            .unwrap_err();
        assert_eq!(err, ActionError::ActorDead(EntityId::PLAYER));
    }
}
