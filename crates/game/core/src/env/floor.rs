use crate::env::OracleError;
use crate::state::GameState;

/// World progression hook invoked when an actor descends a staircase.
///
/// Implementations rebuild the map behind their `MapOracle` and repopulate
/// `state` for the new floor. Map storage is theirs, so any interior
/// mutability needed to swap the layout is theirs too.
pub trait FloorOracle: Send + Sync {
    fn generate_floor(&self, state: &mut GameState, floor: u32) -> Result<(), OracleError>;
}
