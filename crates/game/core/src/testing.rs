//! Shared fixtures for unit tests.

use std::sync::Arc;

use crate::state::{Board, Entity, EntityId, EntityType, GameState, MovementDomain, Size, TileType};

/// A small palette of tile and entity types covering every occupancy case.
pub(crate) struct ContentFixture {
    pub floor: Arc<TileType>,
    pub wall: Arc<TileType>,
    /// Blocks walkers only.
    pub pit: Arc<TileType>,
    /// Agent walker.
    pub ground: Arc<EntityType>,
    /// Agent flyer.
    pub air: Arc<EntityType>,
    /// Agent that never conflicts.
    pub ghost: Arc<EntityType>,
    /// Walker that never takes turns.
    pub rock: Arc<EntityType>,
}

impl ContentFixture {
    pub fn new() -> Self {
        Self {
            floor: Arc::new(TileType::new("floor")),
            wall: Arc::new(TileType::new("wall").blocking(true, true)),
            pit: Arc::new(TileType::new("pit").blocking(true, false)),
            ground: Arc::new(EntityType::new("goblin", MovementDomain::Ground).agent()),
            air: Arc::new(EntityType::new("bat", MovementDomain::Air).agent()),
            ghost: Arc::new(EntityType::new("wisp", MovementDomain::Ghost).agent()),
            rock: Arc::new(EntityType::new("rock", MovementDomain::Ground)),
        }
    }

    pub fn entity(&self, id: u32, kind: &Arc<EntityType>) -> Entity {
        Entity::new(EntityId(id), Arc::clone(kind))
    }

    pub fn state(&self, size: Size) -> GameState {
        GameState::new(Board::new(size, Arc::clone(&self.floor)))
    }
}
