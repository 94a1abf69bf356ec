//! Item and actor templates keyed by catalog id.

use std::collections::BTreeMap;

use corridor_core::{
    ActorState, AiKind, ConsumableHandle, EntityId, EquipmentType, Equippable, Fighter,
    GameConfig, InventoryState, ItemLocation, ItemState, Level, Position, StatBlock, StatBonus,
    WeaponTraits,
};

/// Equipment part of an item template.
///
/// Instances start with full durability and a full magazine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GearTemplate {
    pub equipment_type: EquipmentType,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bonus: StatBonus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub traits: WeaponTraits,
    #[cfg_attr(feature = "serde", serde(default = "default_durability"))]
    pub durability: u32,
    #[cfg_attr(feature = "serde", serde(default = "default_max_ammo"))]
    pub max_ammo: u32,
}

#[cfg(feature = "serde")]
fn default_durability() -> u32 {
    Equippable::DEFAULT_DURABILITY
}

#[cfg(feature = "serde")]
fn default_max_ammo() -> u32 {
    Equippable::DEFAULT_MAX_AMMO
}

impl GearTemplate {
    pub fn new(equipment_type: EquipmentType) -> Self {
        Self {
            equipment_type,
            bonus: StatBonus::NONE,
            traits: WeaponTraits::empty(),
            durability: Equippable::DEFAULT_DURABILITY,
            max_ammo: Equippable::DEFAULT_MAX_AMMO,
        }
    }

    pub fn build(&self) -> Equippable {
        Equippable::new(self.equipment_type)
            .with_bonus(self.bonus)
            .with_traits(self.traits)
            .with_durability(self.durability)
            .with_max_ammo(self.max_ammo)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemTemplate {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub gear: Option<GearTemplate>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub consumable: Option<ConsumableHandle>,
}

impl ItemTemplate {
    pub fn instantiate(&self, id: EntityId, location: ItemLocation) -> ItemState {
        let mut item = ItemState::new(id, self.name.as_str(), location);
        item.equippable = self.gear.as_ref().map(GearTemplate::build);
        item.consumable = self.consumable;
        item
    }
}

/// Stat line of an actor.
///
/// `level_up_base` of zero means the actor never gains levels; monsters only
/// carry the experience they are worth.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorTemplate {
    pub name: String,
    pub hp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: StatBlock,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ai: Option<AiKind>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub capacity: u8,
    #[cfg_attr(feature = "serde", serde(default))]
    pub level_up_base: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp_given: u32,
}

impl ActorTemplate {
    pub fn instantiate(&self, id: EntityId, position: Position, config: &GameConfig) -> ActorState {
        let mut actor = ActorState::new(
            id,
            self.name.as_str(),
            position,
            Fighter::new(self.hp, self.stats),
        )
        .with_inventory(InventoryState::with_capacity(self.capacity))
        .with_level(Level::new(
            self.level_up_base,
            config.level_up_factor,
            self.xp_given,
        ));
        actor.ai = self.ai;
        actor
    }
}

/// All templates known to a session, keyed by catalog id (`"knife"`, `"grunt"`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    items: BTreeMap<String, ItemTemplate>,
    actors: BTreeMap<String, ActorTemplate>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from loader output. Later duplicates replace earlier ones.
    pub fn from_parts(
        items: impl IntoIterator<Item = (String, ItemTemplate)>,
        actors: impl IntoIterator<Item = (String, ActorTemplate)>,
    ) -> Self {
        Self {
            items: items.into_iter().collect(),
            actors: actors.into_iter().collect(),
        }
    }

    pub fn insert_item(&mut self, key: impl Into<String>, template: ItemTemplate) {
        self.items.insert(key.into(), template);
    }

    pub fn insert_actor(&mut self, key: impl Into<String>, template: ActorTemplate) {
        self.actors.insert(key.into(), template);
    }

    pub fn item(&self, key: &str) -> Option<&ItemTemplate> {
        self.items.get(key)
    }

    pub fn actor(&self, key: &str) -> Option<&ActorTemplate> {
        self.actors.get(key)
    }

    pub fn item_keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    pub fn actor_keys(&self) -> impl Iterator<Item = &str> {
        self.actors.keys().map(String::as_str)
    }
}
