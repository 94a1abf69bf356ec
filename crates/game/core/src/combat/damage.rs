//! Damage calculation.

use crate::config::GameConfig;

/// Attack minus defense, before any floor is applied. May be zero or negative.
pub fn raw_damage(attack: i32, defense: i32) -> i32 {
    attack.saturating_sub(defense)
}

/// Damage actually dealt by a landed attack.
///
/// # Formula
///
/// ```text
/// applied = raw             if raw > 0
///         = minimum_damage  otherwise
/// ```
///
/// A landed attack always hurts, so `minimum_damage` is at least 1 in any
/// sane configuration.
pub fn applied_damage(attack: i32, defense: i32, config: &GameConfig) -> u32 {
    let raw = raw_damage(attack, defense);
    if raw > 0 {
        raw as u32
    } else {
        config.minimum_damage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_raw_damage_passes_through() {
        assert_eq!(applied_damage(5, 2, &GameConfig::default()), 3);
    }

    #[test]
    fn non_positive_raw_damage_is_floored() {
        let config = GameConfig::default();
        assert_eq!(applied_damage(1, 10, &config), 1);
        assert_eq!(applied_damage(3, 3, &config), 1);
        assert_eq!(applied_damage(-4, 0, &config), 1);
    }
}
