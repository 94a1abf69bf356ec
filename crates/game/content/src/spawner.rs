//! Turns catalog templates into live entities.

use corridor_core::{
    EntityId, ErrorSeverity, GameConfig, GameError, GameState, ItemLocation, Position, StateError,
};
use tracing::debug;

use crate::catalog::Catalog;

/// Catalog key of the player template.
pub const PLAYER_TEMPLATE: &str = "player";

/// Gear every new player starts with, equipped.
pub const STARTING_LOADOUT: [&str; 3] = ["knife", "pistol", "light_armor"];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("no item template named '{0}'")]
    UnknownItem(String),

    #[error("no actor template named '{0}'")]
    UnknownActor(String),

    #[error(transparent)]
    State(#[from] StateError),
}

impl GameError for SpawnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            SpawnError::UnknownItem(_) | SpawnError::UnknownActor(_) => ErrorSeverity::Validation,
            SpawnError::State(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            SpawnError::UnknownItem(_) => "SPAWN_UNKNOWN_ITEM",
            SpawnError::UnknownActor(_) => "SPAWN_UNKNOWN_ACTOR",
            SpawnError::State(error) => error.error_code(),
        }
    }
}

/// Creates entities from a [`Catalog`] under a given [`GameConfig`].
pub struct Spawner<'a> {
    catalog: &'a Catalog,
    config: &'a GameConfig,
}

impl<'a> Spawner<'a> {
    pub fn new(catalog: &'a Catalog, config: &'a GameConfig) -> Self {
        Self { catalog, config }
    }

    /// Starts a session: the player at `position` carrying the starting loadout.
    ///
    /// The loadout is equipped silently, so the message log starts empty.
    pub fn new_game(&self, seed: u64, position: Position) -> Result<GameState, SpawnError> {
        let player = self
            .catalog
            .actor(PLAYER_TEMPLATE)
            .ok_or_else(|| SpawnError::UnknownActor(PLAYER_TEMPLATE.to_owned()))?
            .instantiate(EntityId::PLAYER, position, self.config);
        let mut state = GameState::with_seed(seed, player);

        let pack = ItemLocation::InInventory(EntityId::PLAYER);
        for key in STARTING_LOADOUT {
            let item = self.spawn_item(&mut state, key, pack)?;
            state.entities.toggle_equip(EntityId::PLAYER, item, None)?;
        }

        debug!(
            target: "corridor::content",
            seed,
            items = state.entities.items.len(),
            "new game"
        );
        Ok(state)
    }

    /// Places a monster (or any non-player actor) from the catalog.
    pub fn spawn_actor(
        &self,
        state: &mut GameState,
        key: &str,
        position: Position,
    ) -> Result<EntityId, SpawnError> {
        let template = self
            .catalog
            .actor(key)
            .ok_or_else(|| SpawnError::UnknownActor(key.to_owned()))?;
        let id = state.allocate_entity_id();
        Ok(state.spawn_actor(template.instantiate(id, position, self.config))?)
    }

    /// Places a fresh item instance from the catalog.
    pub fn spawn_item(
        &self,
        state: &mut GameState,
        key: &str,
        location: ItemLocation,
    ) -> Result<EntityId, SpawnError> {
        let template = self
            .catalog
            .item(key)
            .ok_or_else(|| SpawnError::UnknownItem(key.to_owned()))?;
        let id = state.allocate_entity_id();
        Ok(state.spawn_item(template.instantiate(id, location))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use corridor_core::{AiKind, EquipmentType, InventoryState, StatBlock, StatBonus};

    use crate::catalog::{ActorTemplate, GearTemplate, ItemTemplate};

    fn gear(name: &str, equipment_type: EquipmentType, bonus: StatBonus) -> ItemTemplate {
        ItemTemplate {
            name: name.into(),
            gear: Some(GearTemplate {
                bonus,
                ..GearTemplate::new(equipment_type)
            }),
            consumable: None,
        }
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert_actor(
            "player",
            ActorTemplate {
                name: "Player".into(),
                hp: 30,
                stats: StatBlock::new(2, 2, 1, 1),
                ai: None,
                capacity: 26,
                level_up_base: 200,
                xp_given: 0,
            },
        );
        catalog.insert_actor(
            "grunt",
            ActorTemplate {
                name: "Grunt".into(),
                hp: 10,
                stats: StatBlock::new(3, 1, 0, 1),
                ai: Some(AiKind::Wandering),
                capacity: 0,
                level_up_base: 0,
                xp_given: 35,
            },
        );
        catalog.insert_item("knife", gear("Knife", EquipmentType::Melee, StatBonus::power(4)));
        catalog.insert_item("pistol", gear("Pistol", EquipmentType::Gun, StatBonus::ranged(4)));
        catalog.insert_item(
            "light_armor",
            gear("Light Armor", EquipmentType::Armor, StatBonus::defense(1)),
        );
        catalog
    }

    #[test]
    fn new_game_equips_the_loadout() {
        let catalog = catalog();
        let config = GameConfig::default();
        let state = Spawner::new(&catalog, &config)
            .new_game(7, Position::new(4, 4))
            .unwrap();

        let player = &state.entities.player;
        assert_eq!(state.game_seed, 7);
        assert_eq!(player.inventory.len(), 3);
        assert!(player.equipment.melee.is_some());
        assert!(player.equipment.gun.is_some());
        assert!(player.equipment.armor.is_some());

        let stats = state.entities.derived_stats(EntityId::PLAYER).unwrap();
        assert_eq!(stats.power, 6);
        assert_eq!(stats.ranged_power, 6);
        assert_eq!(stats.defense, 2);
    }

    #[test]
    fn unknown_keys_are_reported() {
        let catalog = catalog();
        let config = GameConfig::default();
        let spawner = Spawner::new(&catalog, &config);
        let mut state = spawner.new_game(0, Position::ORIGIN).unwrap();

        let err = spawner
            .spawn_actor(&mut state, "dragon", Position::ORIGIN)
            .unwrap_err();
        assert_eq!(err, SpawnError::UnknownActor("dragon".into()));
        assert_eq!(err.severity(), ErrorSeverity::Validation);

        let err = spawner
            .spawn_item(&mut state, "bfg", ItemLocation::OnGround(Position::ORIGIN))
            .unwrap_err();
        assert_eq!(err.error_code(), "SPAWN_UNKNOWN_ITEM");

        let empty = Catalog::new();
        let err = Spawner::new(&empty, &config)
            .new_game(0, Position::ORIGIN)
            .unwrap_err();
        assert_eq!(err, SpawnError::UnknownActor(PLAYER_TEMPLATE.into()));
    }

    #[test]
    fn spawned_entities_get_fresh_ids() {
        let catalog = catalog();
        let config = GameConfig::default();
        let spawner = Spawner::new(&catalog, &config);
        let mut state = spawner.new_game(0, Position::ORIGIN).unwrap();

        let a = spawner.spawn_actor(&mut state, "grunt", Position::new(1, 0)).unwrap();
        let b = spawner.spawn_actor(&mut state, "grunt", Position::new(2, 0)).unwrap();
        assert_ne!(a, b);
        assert!(!a.is_player() && !b.is_player());

        let grunt = state.entities.actor(a).unwrap();
        assert_eq!(grunt.inventory, InventoryState::with_capacity(0));
        assert_eq!(grunt.ai, Some(AiKind::Wandering));
        assert_eq!(state.blocking_entity_at(Position::new(2, 0)), Some(b));
    }

    #[test]
    fn loadout_that_cannot_be_equipped_aborts() {
        let mut catalog = catalog();
        catalog.insert_item(
            "pistol",
            ItemTemplate {
                name: "Pistol".into(),
                gear: None,
                consumable: None,
            },
        );
        let config = GameConfig::default();
        let err = Spawner::new(&catalog, &config)
            .new_game(0, Position::ORIGIN)
            .unwrap_err();
        assert!(matches!(err, SpawnError::State(StateError::NotEquippable(_))));
    }
}
