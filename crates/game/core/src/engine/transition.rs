//! Action transition execution logic.

use crate::action::{Action, ActionTransition};
use crate::env::GameEnv;
use crate::message::MessageSink;
use crate::state::GameState;

use super::errors::{ExecuteError, TransitionPhase};

/// Runs `pre_validate` then `apply`, tagging a failure with its phase.
pub(super) fn drive_transition(
    action: &Action,
    state: &mut GameState,
    env: &GameEnv<'_>,
    messages: &mut dyn MessageSink,
) -> Result<(), ExecuteError> {
    let nonce = state.turn.nonce;
    let fail = |phase, error| ExecuteError {
        action: action.name(),
        actor: action.actor(),
        nonce,
        phase,
        error,
    };

    action
        .pre_validate(state, env)
        .map_err(|error| fail(TransitionPhase::PreValidate, error))?;
    action
        .apply(state, env, messages)
        .map_err(|error| fail(TransitionPhase::Apply, error))
}
