use crate::action::{ActionError, ItemAction};
use crate::message::MessageSink;
use crate::state::{ConsumableHandle, GameState};

/// Per-item consumable effects (healing, scrolls, grenades, ...).
///
/// The effect catalog lives outside the core. An implementation must either
/// apply its whole effect, including consuming the item if it is single-use,
/// or return `ActionError::Impossible` before touching `state`.
///
/// Effects hurt and heal through `GameState::damage_actor` and
/// `GameState::heal_actor`, so a kill always runs the die transition.
pub trait ConsumableOracle: Send + Sync {
    fn activate(
        &self,
        handle: ConsumableHandle,
        action: &ItemAction,
        state: &mut GameState,
        messages: &mut dyn MessageSink,
    ) -> Result<(), ActionError>;
}
