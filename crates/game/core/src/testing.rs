//! Test doubles and fixtures shared by unit and integration tests.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for downstream crates.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};

use crate::env::{
    FloorOracle, MapDimensions, MapOracle, OracleError, RngOracle, StaticTile, TerrainKind,
};
use crate::state::{
    ActorState, AiKind, EntityId, EquipmentType, Equippable, Fighter, GameState, InventoryState,
    ItemLocation, ItemState, Level, Position, StatBlock, StatBonus,
};

/// Open-floor map with optional walls, hidden tiles, and a staircase.
///
/// Every in-bounds tile is floor and visible unless configured otherwise.
#[derive(Clone, Debug, Default)]
pub struct StubMap {
    dimensions: MapDimensions,
    walls: HashSet<Position>,
    hidden: HashSet<Position>,
    downstairs: Option<Position>,
}

impl StubMap {
    pub fn open(width: u32, height: u32) -> Self {
        Self {
            dimensions: MapDimensions::new(width, height),
            ..Self::default()
        }
    }

    pub fn with_wall(mut self, position: Position) -> Self {
        self.walls.insert(position);
        self
    }

    pub fn with_hidden(mut self, position: Position) -> Self {
        self.hidden.insert(position);
        self
    }

    pub fn with_downstairs(mut self, position: Position) -> Self {
        self.downstairs = Some(position);
        self
    }
}

impl MapOracle for StubMap {
    fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    fn tile(&self, position: Position) -> Option<StaticTile> {
        if !self.dimensions.contains(position) {
            return None;
        }
        let terrain = if self.walls.contains(&position) {
            TerrainKind::Wall
        } else if self.downstairs == Some(position) {
            TerrainKind::DownStairs
        } else {
            TerrainKind::Floor
        };
        Some(StaticTile::new(terrain))
    }

    fn is_visible(&self, position: Position) -> bool {
        self.dimensions.contains(position) && !self.hidden.contains(&position)
    }

    fn downstairs(&self) -> Option<Position> {
        self.downstairs
    }
}

/// RNG that replays a fixed script of `[0, 1)` draws and counts them.
///
/// Once the script runs out every draw returns 0.5.
#[derive(Debug)]
pub struct ScriptedRng {
    script: Mutex<VecDeque<f64>>,
    draws: AtomicUsize,
}

impl ScriptedRng {
    pub fn new(script: impl IntoIterator<Item = f64>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            draws: AtomicUsize::new(0),
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, seed: u64) -> u32 {
        (self.unit(seed) * (f64::from(u32::MAX) + 1.0)) as u32
    }

    fn unit(&self, _seed: u64) -> f64 {
        self.draws.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or(0.5)
    }
}

/// Floor generator that only counts how often it was asked for a floor.
#[derive(Debug, Default)]
pub struct NoopFloors {
    generated: AtomicU32,
}

impl NoopFloors {
    pub fn generated(&self) -> u32 {
        self.generated.load(Ordering::SeqCst)
    }
}

impl FloorOracle for NoopFloors {
    fn generate_floor(&self, _state: &mut GameState, _floor: u32) -> Result<(), OracleError> {
        self.generated.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Player with hp 30, power 2, ranged 2, defense 1, a full-size pack, and no gear.
pub fn player_at(position: Position) -> ActorState {
    ActorState::new(
        EntityId::PLAYER,
        "Player",
        position,
        Fighter::new(30, StatBlock::new(2, 2, 1, 1)),
    )
    .with_inventory(InventoryState::with_capacity(26))
    .with_level(Level::new(200, 150, 0))
}

/// Grunt with hp 10, power 3, defense 0, worth 35 xp.
///
/// Unlike catalog grunts it has two inventory slots, so tests can arm it.
pub fn grunt_at(id: EntityId, position: Position) -> ActorState {
    ActorState::new(id, "grunt", position, Fighter::new(10, StatBlock::new(3, 1, 0, 1)))
        .with_ai(AiKind::Wandering)
        .with_inventory(InventoryState::with_capacity(2))
        .with_level(Level::worth(35))
}

fn gear(id: EntityId, name: &str, equippable: Equippable) -> ItemState {
    ItemState::new(id, name, ItemLocation::OnGround(Position::ORIGIN)).with_equippable(equippable)
}

/// Melee weapon with +4 power.
pub fn knife(id: EntityId, durability: u32) -> ItemState {
    gear(
        id,
        "Knife",
        Equippable::new(EquipmentType::Melee)
            .with_bonus(StatBonus::power(4))
            .with_durability(durability),
    )
}

/// Gun with +4 ranged power and `ammo` rounds loaded.
pub fn gun(id: EntityId, ammo: u32) -> ItemState {
    gear(
        id,
        "Pistol",
        Equippable::new(EquipmentType::Gun)
            .with_bonus(StatBonus::ranged(4))
            .with_max_ammo(ammo)
            .with_durability(24),
    )
}

/// Armor with +1 defense.
pub fn light_armor(id: EntityId, durability: u32) -> ItemState {
    gear(
        id,
        "Light Armor",
        Equippable::new(EquipmentType::Armor)
            .with_bonus(StatBonus::defense(1))
            .with_durability(durability),
    )
}

/// Puts `item` in `owner`'s inventory and equips it silently.
///
/// # Panics
///
/// Panics if the fixture cannot be equipped; fixtures are expected to be valid.
pub fn equip(state: &mut GameState, owner: EntityId, mut item: ItemState) -> EntityId {
    item.location = ItemLocation::InInventory(owner);
    let id = state.spawn_item(item).expect("fixture item spawns");
    state
        .entities
        .toggle_equip(owner, id, None)
        .expect("fixture item equips");
    id
}
