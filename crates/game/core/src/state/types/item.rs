//! Item-related state types.
//!
//! - ItemState: every item instance, wherever it currently is
//! - ItemLocation: ground, inventory, or equipment slot
//! - Equippable: the durability/ammo/jam resource attached to gear

use core::iter::Sum;
use core::ops::Add;

use bitflags::bitflags;

use super::{EntityId, Position};

/// Equipment category. Each category maps to exactly one equipment slot.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipmentType {
    Melee,
    Gun,
    Armor,
}

bitflags! {
    /// Behavioural traits of a piece of gear.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct WeaponTraits: u8 {
        /// Ranged attacks always hit regardless of distance.
        const FULLY_ACCURATE = 1 << 0;
        /// The gun never jams.
        const UNJAMMABLE = 1 << 1;
    }
}

/// Additive stat bonus granted by equipped gear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatBonus {
    pub power: i32,
    pub ranged: i32,
    pub defense: i32,
    pub accuracy: i32,
}

impl StatBonus {
    pub const NONE: Self = Self {
        power: 0,
        ranged: 0,
        defense: 0,
        accuracy: 0,
    };

    pub const fn power(power: i32) -> Self {
        Self {
            power,
            ..Self::NONE
        }
    }

    pub const fn ranged(ranged: i32) -> Self {
        Self {
            ranged,
            ..Self::NONE
        }
    }

    pub const fn defense(defense: i32) -> Self {
        Self {
            defense,
            ..Self::NONE
        }
    }
}

impl Add for StatBonus {
    type Output = StatBonus;

    fn add(self, rhs: StatBonus) -> StatBonus {
        StatBonus {
            power: self.power + rhs.power,
            ranged: self.ranged + rhs.ranged,
            defense: self.defense + rhs.defense,
            accuracy: self.accuracy + rhs.accuracy,
        }
    }
}

impl Sum for StatBonus {
    fn sum<I: Iterator<Item = StatBonus>>(iter: I) -> StatBonus {
        iter.fold(StatBonus::NONE, Add::add)
    }
}

/// Outcome of wearing an equippable down by one use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Wear {
    /// Durability dropped by one and the item is still usable.
    Worn { remaining: u32 },
    /// The last point of durability is gone; the owner must destroy the item.
    Broken,
}

/// Durability, ammo, and jam state of a piece of gear.
///
/// Only the resource bookkeeping lives here. Removing a broken item from its
/// owner is a state-level transition (see `GameState::break_equippable`).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equippable {
    pub equipment_type: EquipmentType,
    pub bonus: StatBonus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: WeaponTraits,
    durability: u32,
    max_durability: u32,
    ammo: u32,
    max_ammo: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    is_jammed: bool,
}

impl Equippable {
    pub const DEFAULT_DURABILITY: u32 = 255;
    pub const DEFAULT_MAX_AMMO: u32 = 255;

    /// Creates fresh gear with full durability and a full magazine.
    pub fn new(equipment_type: EquipmentType) -> Self {
        Self {
            equipment_type,
            bonus: StatBonus::NONE,
            traits: WeaponTraits::empty(),
            durability: Self::DEFAULT_DURABILITY,
            max_durability: Self::DEFAULT_DURABILITY,
            ammo: Self::DEFAULT_MAX_AMMO,
            max_ammo: Self::DEFAULT_MAX_AMMO,
            is_jammed: false,
        }
    }

    pub fn with_bonus(mut self, bonus: StatBonus) -> Self {
        self.bonus = bonus;
        self
    }

    pub fn with_durability(mut self, durability: u32) -> Self {
        self.durability = durability;
        self.max_durability = durability;
        self
    }

    /// Sets the magazine size and loads it fully.
    pub fn with_max_ammo(mut self, max_ammo: u32) -> Self {
        self.ammo = max_ammo;
        self.max_ammo = max_ammo;
        self
    }

    pub fn with_traits(mut self, traits: WeaponTraits) -> Self {
        self.traits = traits;
        self
    }

    pub fn durability(&self) -> u32 {
        self.durability
    }

    pub fn max_durability(&self) -> u32 {
        self.max_durability
    }

    pub fn ammo(&self) -> u32 {
        self.ammo
    }

    pub fn max_ammo(&self) -> u32 {
        self.max_ammo
    }

    pub fn is_jammed(&self) -> bool {
        self.is_jammed
    }

    pub fn is_fully_accurate(&self) -> bool {
        self.traits.contains(WeaponTraits::FULLY_ACCURATE)
    }

    pub fn is_unjammable(&self) -> bool {
        self.traits.contains(WeaponTraits::UNJAMMABLE)
    }

    /// Spends one round. Floors at zero.
    pub fn decrement_ammo(&mut self) {
        self.ammo = self.ammo.saturating_sub(1);
    }

    /// Wears the item down by one use.
    ///
    /// Above 1 the durability simply drops. At 1 (or an already exhausted 0)
    /// durability bottoms out at 0 and the item reports itself broken.
    pub fn wear(&mut self) -> Wear {
        if self.durability > 1 {
            self.durability -= 1;
            Wear::Worn {
                remaining: self.durability,
            }
        } else {
            self.durability = 0;
            Wear::Broken
        }
    }

    pub fn jam(&mut self) {
        self.is_jammed = true;
    }

    /// Clears a jam. Returns false when the gun was not jammed.
    pub fn unjam(&mut self) -> bool {
        core::mem::replace(&mut self.is_jammed, false)
    }
}

/// Key of an external consumable effect, resolved by the `ConsumableOracle`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumableHandle(pub u32);

/// Where an item currently is. Changed only by `EntitiesState::relocate_item`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemLocation {
    OnGround(Position),
    InInventory(EntityId),
    /// Held in the owner's inventory and also referenced by one of their slots.
    Equipped {
        owner: EntityId,
        slot: EquipmentType,
    },
}

impl ItemLocation {
    /// Returns the actor whose inventory holds the item, if any.
    pub fn holder(self) -> Option<EntityId> {
        match self {
            ItemLocation::OnGround(_) => None,
            ItemLocation::InInventory(owner) | ItemLocation::Equipped { owner, .. } => Some(owner),
        }
    }

    pub fn is_held_by(self, actor: EntityId) -> bool {
        self.holder() == Some(actor)
    }
}

/// Every item instance in the world, wherever it currently is.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemState {
    pub id: EntityId,
    pub name: String,
    pub location: ItemLocation,
    pub equippable: Option<Equippable>,
    pub consumable: Option<ConsumableHandle>,
}

impl ItemState {
    pub fn new(id: EntityId, name: impl Into<String>, location: ItemLocation) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            equippable: None,
            consumable: None,
        }
    }

    pub fn with_equippable(mut self, equippable: Equippable) -> Self {
        self.equippable = Some(equippable);
        self
    }

    pub fn with_consumable(mut self, handle: ConsumableHandle) -> Self {
        self.consumable = Some(handle);
        self
    }

    pub fn equipment_type(&self) -> Option<EquipmentType> {
        self.equippable.as_ref().map(|gear| gear.equipment_type)
    }
}
