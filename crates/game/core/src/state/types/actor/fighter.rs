//! Combat statistics and health of a combatant.

use crate::state::types::StatBonus;

/// Immutable base combat values of a combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBlock {
    pub base_power: i32,
    pub base_ranged_power: i32,
    pub base_defense: i32,
    pub base_accuracy: i32,
}

impl StatBlock {
    pub const fn new(
        base_power: i32,
        base_ranged_power: i32,
        base_defense: i32,
        base_accuracy: i32,
    ) -> Self {
        Self {
            base_power,
            base_ranged_power,
            base_defense,
            base_accuracy,
        }
    }

    /// Base values plus the given equipment bonus.
    pub fn derive(&self, bonus: StatBonus) -> DerivedStats {
        DerivedStats {
            power: self.base_power + bonus.power,
            ranged_power: self.base_ranged_power + bonus.ranged,
            defense: self.base_defense + bonus.defense,
            accuracy_mult: self.base_accuracy + bonus.accuracy,
        }
    }
}

impl Default for StatBlock {
    fn default() -> Self {
        Self::new(1, 1, 0, 1)
    }
}

/// Stats after equipment bonuses. Always derived on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DerivedStats {
    pub power: i32,
    pub ranged_power: i32,
    pub defense: i32,
    pub accuracy_mult: i32,
}

/// Health and base stats of a combatant.
///
/// `hp` is private so every write goes through the clamp into `[0, max_hp]`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fighter {
    pub stats: StatBlock,
    hp: u32,
    max_hp: u32,
}

impl Fighter {
    /// Creates a fighter at full health.
    pub fn new(max_hp: u32, stats: StatBlock) -> Self {
        Self {
            stats,
            hp: max_hp,
            max_hp,
        }
    }

    pub fn hp(&self) -> u32 {
        self.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Sets hp, clamped into `[0, max_hp]`.
    ///
    /// Crate-private: outside the core, hp only drops through
    /// `GameState::damage_actor`, which runs the die transition at zero.
    pub(crate) fn set_hp(&mut self, value: i64) {
        self.hp = value.clamp(0, i64::from(self.max_hp)) as u32;
    }

    /// Raises hp by `amount` up to `max_hp`. Returns the amount actually recovered.
    pub(crate) fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.set_hp(i64::from(before) + i64::from(amount));
        self.hp - before
    }

    /// Lowers hp by `amount`, flooring at zero. Returns true if hp is now zero.
    ///
    /// This only moves the counter; the die transition is driven by
    /// `GameState::damage_actor`, which knows about the owning actor.
    pub(crate) fn take_damage(&mut self, amount: u32) -> bool {
        self.set_hp(i64::from(self.hp) - i64::from(amount));
        self.hp == 0
    }
}

impl Default for Fighter {
    fn default() -> Self {
        Self::new(1, StatBlock::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heal_clamps_and_reports_recovered_amount() {
        let mut fighter = Fighter::new(30, StatBlock::default());
        fighter.take_damage(10);
        assert_eq!(fighter.heal(4), 4);
        assert_eq!(fighter.heal(100), 6);
        assert_eq!(fighter.hp(), 30);
        assert_eq!(fighter.heal(5), 0);
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut fighter = Fighter::new(5, StatBlock::default());
        assert!(!fighter.take_damage(3));
        assert!(fighter.take_damage(50));
        assert_eq!(fighter.hp(), 0);
    }

    #[test]
    fn set_hp_clamps_both_ends() {
        let mut fighter = Fighter::new(10, StatBlock::default());
        fighter.set_hp(-4);
        assert_eq!(fighter.hp(), 0);
        fighter.set_hp(99);
        assert_eq!(fighter.hp(), 10);
    }

    #[test]
    fn derived_stats_add_bonus_to_base() {
        let block = StatBlock::new(2, 2, 1, 1);
        let derived = block.derive(StatBonus {
            power: 4,
            ranged: 6,
            defense: 1,
            accuracy: 0,
        });
        assert_eq!(derived.power, 6);
        assert_eq!(derived.ranged_power, 8);
        assert_eq!(derived.defense, 2);
        assert_eq!(derived.accuracy_mult, 1);
    }
}
