//! Ranged attack resolution.

/// What happened when a gun was fired.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// The gun jammed. No round was spent.
    Jammed,
    /// The round hit the target.
    Hit,
    /// The round missed.
    Miss,
}

impl ShotOutcome {
    /// Whether a round left the gun.
    pub fn spends_ammo(self) -> bool {
        !matches!(self, ShotOutcome::Jammed)
    }
}

/// Runs the jam draw and, only if the gun did not jam, the hit draw.
///
/// `draw` is called with the roll context and must return a uniform value in
/// `[0, 1)`. A draw below the probability succeeds.
pub fn resolve_shot(
    jam_chance: f64,
    hit_chance: f64,
    mut draw: impl FnMut(u32) -> f64,
) -> ShotOutcome {
    use crate::env::roll;

    if draw(roll::JAM) < jam_chance {
        return ShotOutcome::Jammed;
    }
    if draw(roll::HIT) < hit_chance {
        ShotOutcome::Hit
    } else {
        ShotOutcome::Miss
    }
}
