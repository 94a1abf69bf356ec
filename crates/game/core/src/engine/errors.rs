//! Error types for the action execution pipeline.

use crate::action::ActionError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::EntityId;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
        }
    }
}

/// An action failure, tagged with where in the pipeline it surfaced.
///
/// `Impossible` errors always come from `PreValidate` with the state untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{action} by {actor} failed during {}: {error}", .phase.as_str())]
pub struct ExecuteError {
    pub action: &'static str,
    pub actor: EntityId,
    pub nonce: u64,
    pub phase: TransitionPhase,
    #[source]
    pub error: ActionError,
}

impl ExecuteError {
    pub fn is_impossible(&self) -> bool {
        self.error.is_impossible()
    }

    /// The player-facing reason, for rejected actions.
    pub fn reason(&self) -> Option<&str> {
        self.error.reason()
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.error.severity()
    }

    fn error_code(&self) -> &'static str {
        self.error.error_code()
    }
}
