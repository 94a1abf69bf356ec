//! Hit and jam probabilities for ranged attacks.

use crate::config::GameConfig;
use crate::state::Equippable;

/// Probability that a shot at Chebyshev distance `distance` lands.
///
/// # Formula
///
/// ```text
/// hit_chance = 1.0                                         if fully accurate
///            = hit_falloff ^ (1 - distance) * accuracy_mult otherwise
/// ```
///
/// Adjacent shots (distance 1) hit with probability `accuracy_mult`; every
/// further tile divides the chance by `hit_falloff`. Values above 1.0 are
/// returned as-is and behave as a certain hit against a `[0, 1)` draw.
pub fn hit_chance(gun: &Equippable, distance: u32, accuracy_mult: i32, config: &GameConfig) -> f64 {
    if gun.is_fully_accurate() {
        return 1.0;
    }
    let exponent = 1 - distance.min(i32::MAX as u32) as i32;
    config.hit_falloff.powi(exponent) * f64::from(accuracy_mult)
}

/// Probability that a shot jams the gun instead of firing.
pub fn jam_chance(gun: &Equippable, config: &GameConfig) -> f64 {
    if gun.is_unjammable() {
        0.0
    } else {
        config.jam_chance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EquipmentType, WeaponTraits};

    fn pistol() -> Equippable {
        Equippable::new(EquipmentType::Gun)
    }

    #[test]
    fn adjacent_shot_is_certain_with_unit_accuracy() {
        let config = GameConfig::default();
        assert_eq!(hit_chance(&pistol(), 1, 1, &config), 1.0);
    }

    #[test]
    fn chance_falls_off_with_distance() {
        let config = GameConfig::default();
        let at_three = hit_chance(&pistol(), 3, 1, &config);
        assert!((at_three - 1.15f64.powi(-2)).abs() < 1e-12);
        assert!(hit_chance(&pistol(), 4, 1, &config) < at_three);
    }

    #[test]
    fn fully_accurate_ignores_distance_and_accuracy() {
        let config = GameConfig::default();
        let bfg = pistol().with_traits(WeaponTraits::FULLY_ACCURATE);
        assert_eq!(hit_chance(&bfg, 40, 0, &config), 1.0);
    }

    #[test]
    fn unjammable_never_jams() {
        let config = GameConfig::default();
        assert_eq!(jam_chance(&pistol(), &config), 0.05);
        let bfg = pistol().with_traits(WeaponTraits::UNJAMMABLE);
        assert_eq!(jam_chance(&bfg, &config), 0.0);
    }
}
