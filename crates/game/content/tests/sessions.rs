//! Whole-session scenarios over the shipped content: catalog, map, and config
//! from `data/`, actions driven through the engine.

use std::path::PathBuf;

use corridor_content::{Catalog, ContentFactory, GridMap, STARTING_LOADOUT, Spawner};
use corridor_core::testing::{NoopFloors, ScriptedRng};
use corridor_core::{
    Action, BumpAction, DropItemAction, EntityId, EquipAction, GameConfig, GameEngine, GameEnv,
    GameState, MeleeAction, MessageColor, MessageLog, PcgRng, PickupAction, Position,
    RangedAction, TakeStairsAction, UnjamAction, WaitAction,
};

const START: Position = Position::new(1, 1);

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

struct Session {
    catalog: Catalog,
    config: GameConfig,
    map: GridMap,
    state: GameState,
    log: MessageLog,
}

impl Session {
    fn start() -> Self {
        init_tracing();
        let factory = factory();
        let catalog = factory.load_catalog().unwrap();
        let config = factory.load_config().unwrap();
        let map = factory.load_map("corridor").unwrap();
        let state = Spawner::new(&catalog, &config)
            .new_game(42, START)
            .unwrap();
        Self {
            catalog,
            config,
            map,
            state,
            log: MessageLog::new(),
        }
    }

    fn spawn(&mut self, key: &str, position: Position) -> EntityId {
        Spawner::new(&self.catalog, &self.config)
            .spawn_actor(&mut self.state, key, position)
            .unwrap()
    }

    fn gun(&self) -> EntityId {
        self.state.entities.player.equipment.gun.unwrap()
    }

    fn ammo(&self) -> u32 {
        let gun = self.state.entities.item(self.gun()).unwrap();
        gun.equippable.as_ref().unwrap().ammo()
    }
}

#[test]
fn shipped_catalog_has_every_preset() {
    let catalog = factory().load_catalog().unwrap();
    for key in [
        "brass_knuckles",
        "knife",
        "pistol",
        "rifle",
        "light_armor",
        "heavy_armor",
        "lightsaber",
        "bfg",
        "plot_armor",
    ] {
        assert!(catalog.item(key).is_some(), "missing item {key}");
    }
    for key in ["player", "grunt", "brute", "marvin"] {
        assert!(catalog.actor(key).is_some(), "missing actor {key}");
    }

    let bfg = catalog.item("bfg").unwrap().gear.clone().unwrap().build();
    assert!(bfg.is_fully_accurate());
    assert!(bfg.is_unjammable());
}

#[test]
fn new_game_starts_armed_and_silent() {
    let session = Session::start();
    let player = &session.state.entities.player;

    assert_eq!(player.fighter.hp(), 30);
    assert_eq!(player.inventory.len(), STARTING_LOADOUT.len());
    assert!(player.inventory.items().iter().all(|&item| player.equipment.is_equipped(item)));
    assert_eq!(session.ammo(), 6);
    assert_eq!(session.state.turn.nonce, 0);
    assert!(session.log.is_empty());
}

#[test]
fn melee_kill_awards_experience() {
    let mut session = Session::start();
    let grunt = session.spawn("grunt", START.offset(1, 0));
    let env = GameEnv::empty()
        .with_map(&session.map)
        .with_config(&session.config);
    let bump = Action::from(BumpAction::new(EntityId::PLAYER, 1, 0));

    let mut engine = GameEngine::new(&mut session.state);
    engine.perform(&env, &bump, &mut session.log).unwrap();
    engine.perform(&env, &bump, &mut session.log).unwrap();

    assert_eq!(
        session.log.texts().collect::<Vec<_>>(),
        [
            "Player attacks Grunt with Knife for 6 hit points.",
            "Player attacks Grunt with Knife for 6 hit points.",
            "Grunt is dead!",
            "You gain 35 experience points.",
        ]
    );
    assert_eq!(session.log.messages()[0].color, MessageColor::PlayerAttack);

    let corpse = session.state.entities.actor(grunt).unwrap();
    assert!(!corpse.alive);
    assert_eq!(corpse.name, "remains of Grunt");
    assert_eq!(corpse.ai, None);
    assert_eq!(session.state.entities.player.level.current_xp, 35);
    assert_eq!(session.state.turn.nonce, 2);

    // The corpse no longer blocks: the next bump walks onto it.
    let mut engine = GameEngine::new(&mut session.state);
    engine.perform(&env, &bump, &mut session.log).unwrap();
    assert_eq!(session.state.entities.player.position, START.offset(1, 0));
}

#[test]
fn shots_spend_ammo_and_jams_block_until_cleared() {
    let mut session = Session::start();
    let grunt = session.spawn("grunt", START.offset(3, 0));
    // No jam, then a hit; then a jam.
    let rng = ScriptedRng::new([0.9, 0.1, 0.01]);
    let env = GameEnv::empty()
        .with_map(&session.map)
        .with_rng(&rng)
        .with_config(&session.config);
    let shoot = Action::from(RangedAction::new(EntityId::PLAYER, Some(START.offset(3, 0))));

    let mut engine = GameEngine::new(&mut session.state);
    engine.perform(&env, &shoot, &mut session.log).unwrap();
    assert_eq!(rng.draws(), 2);
    assert_eq!(
        session.log.last().unwrap().text,
        "Player shoots at the Grunt for 6 hit points."
    );
    assert_eq!(session.state.entities.actor(grunt).unwrap().fighter.hp(), 4);
    assert_eq!(session.ammo(), 5);

    let mut engine = GameEngine::new(&mut session.state);
    engine.perform(&env, &shoot, &mut session.log).unwrap();
    assert_eq!(rng.draws(), 3);
    assert_eq!(session.log.last().unwrap().text, "Your Pistol jams!");
    assert_eq!(session.ammo(), 5);

    let before = session.state.clone();
    let mut engine = GameEngine::new(&mut session.state);
    let err = engine.perform(&env, &shoot, &mut session.log).unwrap_err();
    assert_eq!(err.reason(), Some("Your gun is jammed!"));
    assert_eq!(session.state, before);
    assert_eq!(rng.draws(), 3);

    let unjam = Action::from(UnjamAction::new(EntityId::PLAYER));
    let mut engine = GameEngine::new(&mut session.state);
    engine.perform(&env, &unjam, &mut session.log).unwrap();
    assert_eq!(
        session.log.last().unwrap().text,
        "You carefully unjam your Pistol."
    );
    let err = engine.perform(&env, &unjam, &mut session.log).unwrap_err();
    assert_eq!(err.reason(), Some("Your Pistol isn't jammed."));
}

#[test]
fn dropped_gun_can_be_picked_up_and_reequipped() {
    let mut session = Session::start();
    session.spawn("marvin", START.offset(2, 0));
    let rng = PcgRng;
    let env = GameEnv::empty()
        .with_map(&session.map)
        .with_rng(&rng)
        .with_config(&session.config);
    let gun = session.gun();

    let mut engine = GameEngine::new(&mut session.state);
    engine
        .perform(&env, &DropItemAction::new(EntityId::PLAYER, gun).into(), &mut session.log)
        .unwrap();
    let err = engine
        .perform(
            &env,
            &RangedAction::new(EntityId::PLAYER, Some(START.offset(2, 0))).into(),
            &mut session.log,
        )
        .unwrap_err();
    assert_eq!(err.reason(), Some("Finger guns can't cause any real damage."));

    engine
        .perform(&env, &PickupAction::new(EntityId::PLAYER).into(), &mut session.log)
        .unwrap();
    engine
        .perform(&env, &EquipAction::new(EntityId::PLAYER, gun).into(), &mut session.log)
        .unwrap();

    assert_eq!(
        session.log.texts().collect::<Vec<_>>(),
        [
            "You remove the Pistol.",
            "You dropped the Pistol.",
            "You took the Pistol!",
            "You equip the Pistol.",
        ]
    );
    assert_eq!(session.state.entities.player.equipment.gun, Some(gun));
    assert_eq!(session.state.items_at(START).count(), 0);
}

#[test]
fn stairs_advance_the_floor() {
    let mut session = Session::start();
    let floors = NoopFloors::default();
    let env = GameEnv::empty()
        .with_map(&session.map)
        .with_floors(&floors)
        .with_config(&session.config);
    let descend = Action::from(TakeStairsAction::new(EntityId::PLAYER));

    let mut engine = GameEngine::new(&mut session.state);
    let err = engine.perform(&env, &descend, &mut session.log).unwrap_err();
    assert_eq!(err.reason(), Some("There are no stairs here."));
    assert_eq!(floors.generated(), 0);

    session.state.entities.player.position = Position::new(14, 3);
    let mut engine = GameEngine::new(&mut session.state);
    engine.perform(&env, &descend, &mut session.log).unwrap();

    assert_eq!(floors.generated(), 1);
    assert_eq!(session.state.turn.floor, 1);
    let message = session.log.last().unwrap();
    assert_eq!(message.text, "You descend the staircase.");
    assert_eq!(message.color, MessageColor::Descend);
}

#[test]
fn player_death_ends_the_run() {
    let mut session = Session::start();
    let grunt = session.spawn("grunt", START.offset(1, 0));
    session
        .state
        .damage_actor(EntityId::PLAYER, 29, &mut MessageLog::new())
        .unwrap();
    let env = GameEnv::empty()
        .with_map(&session.map)
        .with_config(&session.config);

    let mut engine = GameEngine::new(&mut session.state);
    engine
        .perform(&env, &MeleeAction::new(grunt, -1, 0).into(), &mut session.log)
        .unwrap();

    // Grunt power 3 against defense 1 + 1 from the armor.
    assert_eq!(
        session.log.texts().collect::<Vec<_>>(),
        ["Grunt attacks Player for 1 hit point.", "You died!"]
    );
    assert_eq!(session.log.messages()[0].color, MessageColor::EnemyAttack);
    assert_eq!(session.log.messages()[1].color, MessageColor::PlayerDie);

    let player = &session.state.entities.player;
    assert!(!player.alive);
    assert_eq!(player.name, "remains of Player");
    assert_eq!(player.level.current_xp, 0);

    let nonce = session.state.turn.nonce;
    let mut engine = GameEngine::new(&mut session.state);
    let err = engine
        .perform(&env, &WaitAction::new(EntityId::PLAYER).into(), &mut session.log)
        .unwrap_err();
    assert!(!err.is_impossible());
    assert_eq!(session.state.turn.nonce, nonce);
}
