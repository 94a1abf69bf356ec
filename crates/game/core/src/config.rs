/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Probability that a jammable gun jams on a shot attempt.
    pub jam_chance: f64,

    /// Base of the ranged accuracy falloff: `hit_falloff^(1 - distance)`.
    pub hit_falloff: f64,

    /// Damage dealt by any landed attack whose raw damage is not positive.
    pub minimum_damage: u32,

    /// Experience added to the level-up threshold for every level gained.
    pub level_up_factor: u32,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    /// Hard upper bound on inventory slots for any actor.
    pub const MAX_INVENTORY_SLOTS: usize = 26;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_JAM_CHANCE: f64 = 0.05;
    pub const DEFAULT_HIT_FALLOFF: f64 = 1.15;
    pub const DEFAULT_MINIMUM_DAMAGE: u32 = 1;
    pub const DEFAULT_LEVEL_UP_FACTOR: u32 = 150;

    pub const fn new() -> Self {
        Self {
            jam_chance: Self::DEFAULT_JAM_CHANCE,
            hit_falloff: Self::DEFAULT_HIT_FALLOFF,
            minimum_damage: Self::DEFAULT_MINIMUM_DAMAGE,
            level_up_factor: Self::DEFAULT_LEVEL_UP_FACTOR,
        }
    }

    pub fn with_jam_chance(mut self, jam_chance: f64) -> Self {
        self.jam_chance = jam_chance;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
