//! Actor-related state types.
//!
//! - ActorState: main actor structure
//! - Fighter: health and base combat stats
//! - Equipment: melee, gun, and armor slots
//! - Inventory: item storage
//! - Level: experience progression

pub mod equipment;
pub mod fighter;
pub mod inventory;
pub mod level;

pub use equipment::Equipment;
pub use fighter::{DerivedStats, Fighter, StatBlock};
pub use inventory::InventoryState;
pub use level::Level;

use super::{EntityId, Position};

/// Behaviour driver attached to a non-player actor.
///
/// The decision policy itself lives outside the core; the tag only records
/// which policy drives the actor, and is cleared when the actor dies.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AiKind {
    Hostile,
    Wandering,
}

/// Complete actor state.
///
/// # Invariants
///
/// - A dead actor (`alive == false`) never blocks movement and has no AI
/// - Every id in `equipment` is also in `inventory`
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorState {
    pub id: EntityId,
    pub name: String,
    pub position: Position,
    pub blocks_movement: bool,
    pub alive: bool,
    pub ai: Option<AiKind>,
    pub fighter: Fighter,
    pub equipment: Equipment,
    pub inventory: InventoryState,
    pub level: Level,
}

impl ActorState {
    pub fn new(
        id: EntityId,
        name: impl Into<String>,
        position: Position,
        fighter: Fighter,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            blocks_movement: true,
            alive: true,
            ai: None,
            fighter,
            equipment: Equipment::empty(),
            inventory: InventoryState::default(),
            level: Level::default(),
        }
    }

    pub fn with_ai(mut self, ai: AiKind) -> Self {
        self.ai = Some(ai);
        self
    }

    pub fn with_inventory(mut self, inventory: InventoryState) -> Self {
        self.inventory = inventory;
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    #[inline]
    pub fn is_player(&self) -> bool {
        self.id.is_player()
    }
}

impl Default for ActorState {
    fn default() -> Self {
        Self::new(EntityId::PLAYER, "Player", Position::ORIGIN, Fighter::default())
    }
}
