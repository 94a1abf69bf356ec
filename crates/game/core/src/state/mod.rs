//! Authoritative game state representation.
//!
//! This module owns the data structures that describe entities and turn
//! bookkeeping. Callers clone or query this state but mutate it exclusively
//! through the engine and the transitions in [`lifecycle`].
mod error;
pub mod lifecycle;
mod turn;
pub mod types;

pub use error::StateError;
pub use turn::TurnState;
pub use types::{
    ActorState, AiKind, ConsumableHandle, DerivedStats, EntitiesState, EntityId, EquipChange,
    Equipment, EquipmentType, Equippable, Fighter, InventoryState, ItemLocation, ItemState, Level,
    Position, StatBlock, StatBonus, WeaponTraits, Wear,
};

/// Canonical snapshot of the deterministic game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// RNG seed for deterministic random generation.
    ///
    /// Set once at game initialization and never modified.
    /// Combined with `turn.nonce` to generate unique seeds for each random event.
    pub game_seed: u64,

    /// Sequential entity ID allocator (monotonically increasing).
    ///
    /// Never reused. ID 0 (PLAYER) is reserved.
    next_entity_id: u32,

    pub turn: TurnState,
    /// The player, every NPC on the floor, and every item instance.
    pub entities: EntitiesState,
}

impl GameState {
    /// Creates a fresh state around the given player.
    pub fn new(player: ActorState) -> Self {
        Self::with_seed(0, player)
    }

    /// Creates a fresh state with a specific game seed.
    pub fn with_seed(game_seed: u64, player: ActorState) -> Self {
        Self {
            game_seed,
            next_entity_id: player.id.0.max(EntityId::PLAYER.0) + 1,
            turn: TurnState::default(),
            entities: EntitiesState::new(player),
        }
    }

    /// Allocates a new unique EntityId.
    ///
    /// Skips the reserved player id and any id already taken by an entity that
    /// was spawned with an explicit id.
    pub fn allocate_entity_id(&mut self) -> EntityId {
        loop {
            let candidate = EntityId(self.next_entity_id);
            self.next_entity_id = self.next_entity_id.wrapping_add(1);

            let taken = candidate == EntityId::PLAYER
                || self.entities.actor(candidate).is_some()
                || self.entities.item(candidate).is_some();
            if !taken {
                return candidate;
            }
        }
    }

    /// Adds an NPC to the floor.
    pub fn spawn_actor(&mut self, actor: ActorState) -> Result<EntityId, StateError> {
        let id = actor.id;
        self.entities.spawn_npc(actor)?;
        Ok(id)
    }

    /// Adds an item at its declared location.
    pub fn spawn_item(&mut self, item: ItemState) -> Result<EntityId, StateError> {
        let id = item.id;
        self.entities.spawn_item(item)?;
        Ok(id)
    }

    /// Returns the entity that blocks movement into `position`, if any.
    pub fn blocking_entity_at(&self, position: Position) -> Option<EntityId> {
        self.entities
            .all_actors()
            .find(|actor| actor.blocks_movement && actor.position == position)
            .map(|actor| actor.id)
    }

    /// Returns the living actor standing on `position`. Corpses are ignored.
    pub fn actor_at(&self, position: Position) -> Option<&ActorState> {
        self.entities
            .all_actors()
            .find(|actor| actor.alive && actor.position == position)
    }

    /// Items lying on the ground at `position`, in spawn order.
    pub fn items_at(&self, position: Position) -> impl Iterator<Item = &ItemState> {
        self.entities.items_at(position)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(ActorState::default())
    }
}
