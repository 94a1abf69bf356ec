//! Action execution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. Every
//! player or AI command flows through [`GameEngine::perform`], which runs the
//! action's transition, advances the nonce on success, and logs the outcome.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase};

use tracing::{debug, warn};

use crate::action::{Action, ActionTransition};
use crate::env::GameEnv;
use crate::error::GameError;
use crate::message::MessageSink;
use crate::state::GameState;

/// Applies actions to a borrowed game state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
}

impl<'a> GameEngine<'a> {
    /// Creates a new game engine with the given state.
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Resolves one action.
    ///
    /// On success the nonce advances, so the next action draws from a fresh
    /// random stream. A rejected action (`Impossible`) leaves the state
    /// exactly as it was, nonce included.
    pub fn perform(
        &mut self,
        env: &GameEnv<'_>,
        action: &Action,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ExecuteError> {
        let nonce = self.state.turn.nonce;

        match transition::drive_transition(action, self.state, env, messages) {
            Ok(()) => {
                self.state.turn.nonce += 1;
                debug!(
                    target: "corridor::engine",
                    action = action.name(),
                    actor = %action.actor(),
                    nonce,
                    "action resolved"
                );
                Ok(())
            }
            Err(error) if error.is_impossible() => {
                debug!(
                    target: "corridor::engine",
                    action = action.name(),
                    actor = %action.actor(),
                    nonce,
                    reason = error.reason().unwrap_or_default(),
                    "action rejected"
                );
                Err(error)
            }
            Err(error) => {
                warn!(
                    target: "corridor::engine",
                    action = action.name(),
                    actor = %action.actor(),
                    nonce,
                    phase = error.phase.as_str(),
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    %error,
                    "action failed"
                );
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionError, MovementAction, WaitAction};
    use crate::env::OracleError;
    use crate::error::ErrorSeverity;
    use crate::message::MessageLog;
    use crate::state::{EntityId, Position};
    use crate::testing::{StubMap, player_at};

    #[test]
    fn nonce_advances_only_on_success() {
        let mut state = GameState::new(player_at(Position::new(1, 1)));
        let map = StubMap::open(3, 3);
        let env = GameEnv::empty().with_map(&map);
        let mut log = MessageLog::new();
        let mut engine = GameEngine::new(&mut state);

        engine
            .perform(&env, &WaitAction::new(EntityId::PLAYER).into(), &mut log)
            .unwrap();
        assert_eq!(engine.state().turn.nonce, 1);

        let err = engine
            .perform(
                &env,
                &MovementAction::new(EntityId::PLAYER, 5, 0).into(),
                &mut log,
            )
            .unwrap_err();
        assert!(err.is_impossible());
        assert_eq!(err.phase, TransitionPhase::PreValidate);
        assert_eq!(err.action, "move");
        assert_eq!(engine.state().turn.nonce, 1);
    }

    #[test]
    fn missing_map_is_fatal() {
        let mut state = GameState::new(player_at(Position::ORIGIN));
        let env = GameEnv::empty();
        let err = GameEngine::new(&mut state)
            .perform(
                &env,
                &MovementAction::new(EntityId::PLAYER, 1, 0).into(),
                &mut MessageLog::new(),
            )
            .unwrap_err();
        assert_eq!(err.error, ActionError::from(OracleError::MapNotAvailable));
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
    }
}
