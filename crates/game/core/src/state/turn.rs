/// Turn bookkeeping for a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    /// Count of successfully resolved actions. Feeds `compute_seed`, so two
    /// actions never share a random stream.
    pub nonce: u64,

    /// Dungeon depth. Zero until the first floor is generated.
    pub floor: u32,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }
}
