//! Authoritative game state representation.
//!
//! This module owns the board, the entity registry and the id allocator.
//! Callers read through [`GameState`]; every mutation goes through the action
//! executor so that each change produces a log.
pub mod board;
pub mod error;
pub mod types;

use std::sync::Arc;

pub use board::Board;
pub use error::{BoardError, StateError};
pub use types::{
    Coords, EntitiesState, Entity, EntityId, EntityType, Layers, MovementDomain, Size, Tile,
    TileType,
};

/// Canonical snapshot of the game world.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Sequential entity ID allocator (monotonically increasing).
    ///
    /// Never reused, even after the entity is destroyed.
    next_entity_id: u32,

    pub(crate) board: Board,
    pub(crate) entities: EntitiesState,
}

impl GameState {
    /// Creates an empty state over the given board.
    pub fn new(board: Board) -> Self {
        Self {
            next_entity_id: 0,
            board,
            entities: EntitiesState::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn entities(&self) -> &EntitiesState {
        &self.entities
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    pub fn position(&self, id: EntityId) -> Option<Coords> {
        self.board.coords(id)
    }

    pub fn health(&self, id: EntityId) -> Option<u32> {
        self.entities.get(id).map(Entity::health)
    }

    /// Id the next successful spawn will receive.
    pub fn peek_entity_id(&self) -> EntityId {
        EntityId(self.next_entity_id)
    }

    /// Creates an entity of `kind` and places it at `at`.
    ///
    /// The id is only consumed when placement succeeds.
    pub(crate) fn spawn_entity(
        &mut self,
        kind: &Arc<EntityType>,
        at: Coords,
    ) -> Result<EntityId, StateError> {
        let id = self.peek_entity_id();
        let next = self
            .next_entity_id
            .checked_add(1)
            .ok_or(StateError::EntityIdOverflow {
                current: self.next_entity_id,
            })?;

        let entity = Entity::new(id, Arc::clone(kind));
        self.board.try_add(&entity, at)?;
        self.entities.insert(entity);
        self.next_entity_id = next;
        Ok(id)
    }

    /// Removes an entity from the board and the registry.
    ///
    /// Returns the entity and the position it occupied, or `None` when it was
    /// not on the board.
    pub(crate) fn destroy_entity(&mut self, id: EntityId) -> Option<(Entity, Coords)> {
        let at = self.board.try_remove(id).ok()?;
        let entity = self.entities.remove(id)?;
        Some((entity, at))
    }
}
