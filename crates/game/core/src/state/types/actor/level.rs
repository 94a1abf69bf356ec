//! Experience and character level.

use crate::message::{MessageColor, MessageSink};

/// Experience progression of an actor, and the experience it is worth when defeated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Level {
    pub current_level: u32,
    pub current_xp: u32,
    /// Experience needed for the first level-up. Zero disables progression.
    pub level_up_base: u32,
    pub level_up_factor: u32,
    /// Experience awarded to the player for defeating this actor.
    pub xp_given: u32,
}

impl Level {
    pub fn new(level_up_base: u32, level_up_factor: u32, xp_given: u32) -> Self {
        Self {
            current_level: 1,
            current_xp: 0,
            level_up_base,
            level_up_factor,
            xp_given,
        }
    }

    /// Level data for an actor that never levels up and is worth `xp_given`.
    pub fn worth(xp_given: u32) -> Self {
        Self::new(0, 0, xp_given)
    }

    pub fn experience_to_next_level(&self) -> u32 {
        self.level_up_base + self.current_level * self.level_up_factor
    }

    pub fn requires_level_up(&self) -> bool {
        self.level_up_base > 0 && self.current_xp >= self.experience_to_next_level()
    }

    /// Adds experience and announces it. Returns true if a level-up became due.
    pub fn add_xp(&mut self, xp: u32, messages: &mut dyn MessageSink) -> bool {
        if xp == 0 || self.level_up_base == 0 {
            return false;
        }

        self.current_xp += xp;
        messages.add_message(
            format!("You gain {xp} experience points."),
            MessageColor::White,
        );

        if self.requires_level_up() {
            messages.add_message(
                format!("You advance to level {}!", self.current_level + 1),
                MessageColor::White,
            );
            return true;
        }
        false
    }

    /// Consumes the threshold experience and raises the level by one.
    pub fn increase_level(&mut self) {
        self.current_xp = self
            .current_xp
            .saturating_sub(self.experience_to_next_level());
        self.current_level += 1;
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::worth(0)
    }
}
