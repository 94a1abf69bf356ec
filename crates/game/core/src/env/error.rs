//! Oracle access errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised when the environment cannot serve a request.
///
/// The rules cannot resolve an action without the collaborators it needs, so
/// every variant is fatal to the caller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// MapOracle is not available in the environment.
    #[error("MapOracle not available")]
    MapNotAvailable,

    /// RngOracle is not available in the environment.
    #[error("RngOracle not available")]
    RngNotAvailable,

    /// ConsumableOracle is not available in the environment.
    #[error("ConsumableOracle not available")]
    ConsumablesNotAvailable,

    /// FloorOracle is not available in the environment.
    #[error("FloorOracle not available")]
    FloorsNotAvailable,

    /// The floor generator could not build the next floor.
    #[error("floor {floor} could not be generated: {reason}")]
    FloorGeneration { floor: u32, reason: String },
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            MapNotAvailable => "ORACLE_MAP_NOT_AVAILABLE",
            RngNotAvailable => "ORACLE_RNG_NOT_AVAILABLE",
            ConsumablesNotAvailable => "ORACLE_CONSUMABLES_NOT_AVAILABLE",
            FloorsNotAvailable => "ORACLE_FLOORS_NOT_AVAILABLE",
            FloorGeneration { .. } => "ORACLE_FLOOR_GENERATION",
        }
    }
}
