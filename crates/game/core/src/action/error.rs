//! Action execution errors.

use std::borrow::Cow;

use crate::env::OracleError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{EntityId, StateError};

/// Errors that can occur while resolving an action.
///
/// `Impossible` is the only outcome a caller is expected to handle: the
/// action's preconditions did not hold, nothing was mutated, and the reason
/// is fit to show the player. Every other variant is a defect in the caller
/// or in the environment.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// A precondition failed. The reason is player-facing.
    #[error("{0}")]
    Impossible(Cow<'static, str>),

    /// Actor not found in game state.
    #[error("actor {0} not found")]
    ActorNotFound(EntityId),

    /// Dead actors do not act.
    #[error("actor {0} is dead")]
    ActorDead(EntityId),

    /// Item not found in game state.
    #[error("item {0} not found")]
    ItemNotFound(EntityId),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    State(#[from] StateError),
}

impl ActionError {
    pub fn impossible(reason: impl Into<Cow<'static, str>>) -> Self {
        Self::Impossible(reason.into())
    }

    pub fn is_impossible(&self) -> bool {
        matches!(self, Self::Impossible(_))
    }

    /// The player-facing reason, for `Impossible` errors.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Impossible(reason) => Some(reason),
            _ => None,
        }
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        use ActionError::*;
        match self {
            Impossible(_) => ErrorSeverity::Recoverable,
            ActorNotFound(_) | ActorDead(_) | ItemNotFound(_) => ErrorSeverity::Validation,
            Oracle(error) => error.severity(),
            State(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        use ActionError::*;
        match self {
            Impossible(_) => "ACTION_IMPOSSIBLE",
            ActorNotFound(_) => "ACTION_ACTOR_NOT_FOUND",
            ActorDead(_) => "ACTION_ACTOR_DEAD",
            ItemNotFound(_) => "ACTION_ITEM_NOT_FOUND",
            Oracle(error) => error.error_code(),
            State(error) => error.error_code(),
        }
    }
}
