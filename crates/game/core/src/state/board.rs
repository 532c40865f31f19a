//! Fixed-size grid of tiles with an entity reverse index.
//!
//! The board owns every entity's position. A tile's occupant set always equals
//! the set of entities whose indexed position is that tile's coordinate; every
//! mutator below updates both sides together or not at all.

use std::collections::BTreeMap;
use std::sync::Arc;

use super::BoardError;
use super::types::{Coords, Entity, EntityId, Size, Tile, TileType};

#[derive(Clone, Debug)]
pub struct Board {
    size: Size,
    tiles: Vec<Tile>,
    positions: BTreeMap<EntityId, Coords>,
}

impl Board {
    /// Creates a board with every tile set to `default_tile`.
    pub fn new(size: Size, default_tile: Arc<TileType>) -> Self {
        let tiles = (0..size.area())
            .map(|_| Tile::new(Arc::clone(&default_tile)))
            .collect();

        Self {
            size,
            tiles,
            positions: BTreeMap::new(),
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    fn tile(&self, at: Coords) -> Option<&Tile> {
        self.size.index(at).and_then(|index| self.tiles.get(index))
    }

    fn tile_mut(&mut self, at: Coords) -> Option<&mut Tile> {
        self.size.index(at).and_then(|index| self.tiles.get_mut(index))
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Position of a placed entity.
    pub fn coords(&self, id: EntityId) -> Option<Coords> {
        self.positions.get(&id).copied()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Occupants of the tile at `at`, in placement order. Empty when out of bounds.
    pub fn entities(&self, at: Coords) -> impl Iterator<Item = EntityId> + '_ {
        self.tile(at).into_iter().flat_map(Tile::occupants)
    }

    /// Tile type at `at`, or `None` when out of bounds.
    pub fn tile_type(&self, at: Coords) -> Option<&Arc<TileType>> {
        self.tile(at).map(Tile::kind)
    }

    /// Every placed entity with its position, ordered by id.
    pub fn placements(&self) -> impl Iterator<Item = (EntityId, Coords)> + '_ {
        self.positions.iter().map(|(id, at)| (*id, *at))
    }

    /// Entities within `radius` (Chebyshev) of `center`.
    ///
    /// Tiles are scanned row-major; occupants of one tile keep placement order.
    pub fn entities_within(&self, center: Coords, radius: u32) -> Vec<EntityId> {
        let radius = i32::try_from(radius).unwrap_or(i32::MAX);
        let max_x = i32::try_from(self.size.width).unwrap_or(i32::MAX);
        let max_y = i32::try_from(self.size.height).unwrap_or(i32::MAX);

        let min_y = center.y.saturating_sub(radius).max(0);
        let end_y = center.y.saturating_add(radius).min(max_y - 1);
        let min_x = center.x.saturating_sub(radius).max(0);
        let end_x = center.x.saturating_add(radius).min(max_x - 1);

        let mut found = Vec::new();
        for y in min_y..=end_y {
            for x in min_x..=end_x {
                found.extend(self.entities(Coords::new(x, y)));
            }
        }
        found
    }

    // ------------------------------------------------------------------------
    // Predicates
    // ------------------------------------------------------------------------

    pub fn check_add(&self, entity: &Entity, at: Coords) -> Result<(), BoardError> {
        if self.contains(entity.id()) {
            return Err(BoardError::AlreadyPlaced);
        }
        let tile = self.tile(at).ok_or(BoardError::OutOfBounds)?;
        tile.check_add(entity.layers())
    }

    pub fn can_add(&self, entity: &Entity, at: Coords) -> bool {
        self.check_add(entity, at).is_ok()
    }

    pub fn check_move(&self, entity: &Entity, to: Coords) -> Result<(), BoardError> {
        let from = self.coords(entity.id()).ok_or(BoardError::NotPlaced)?;
        let tile = self.tile(to).ok_or(BoardError::OutOfBounds)?;
        if to == from {
            return Ok(());
        }
        tile.check_add(entity.layers())
    }

    pub fn can_move(&self, entity: &Entity, to: Coords) -> bool {
        self.check_move(entity, to).is_ok()
    }

    pub fn check_modify(&self, kind: &TileType, at: Coords) -> Result<(), BoardError> {
        let tile = self.tile(at).ok_or(BoardError::OutOfBounds)?;
        tile.check_modify(kind)
    }

    pub fn can_modify(&self, kind: &TileType, at: Coords) -> bool {
        self.check_modify(kind, at).is_ok()
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    pub fn try_add(&mut self, entity: &Entity, at: Coords) -> Result<(), BoardError> {
        if self.contains(entity.id()) {
            return Err(BoardError::AlreadyPlaced);
        }
        let tile = self.tile_mut(at).ok_or(BoardError::OutOfBounds)?;
        tile.add(entity.id(), entity.layers())?;
        self.positions.insert(entity.id(), at);
        Ok(())
    }

    pub fn add(&mut self, entity: &Entity, at: Coords) -> bool {
        self.try_add(entity, at).is_ok()
    }

    /// Moves a placed entity and returns its previous position.
    pub fn try_move(&mut self, entity: &Entity, to: Coords) -> Result<Coords, BoardError> {
        self.check_move(entity, to)?;
        let from = self.coords(entity.id()).ok_or(BoardError::NotPlaced)?;
        if to == from {
            return Ok(from);
        }

        let layers = entity.layers();
        self.tile_mut(to)
            .ok_or(BoardError::OutOfBounds)?
            .add(entity.id(), layers)?;
        if let Some(source) = self.tile_mut(from) {
            source.remove(entity.id());
        }
        self.positions.insert(entity.id(), to);
        Ok(from)
    }

    pub fn move_entity(&mut self, entity: &Entity, to: Coords) -> bool {
        self.try_move(entity, to).is_ok()
    }

    /// Removes an entity and returns the position it occupied.
    pub fn try_remove(&mut self, id: EntityId) -> Result<Coords, BoardError> {
        let at = self.positions.remove(&id).ok_or(BoardError::NotPlaced)?;
        if let Some(tile) = self.tile_mut(at) {
            tile.remove(id);
        }
        Ok(at)
    }

    pub fn remove(&mut self, id: EntityId) -> bool {
        self.try_remove(id).is_ok()
    }

    /// Swaps the tile type at `at`, keeping occupants. Returns the previous type.
    pub fn try_modify(
        &mut self,
        kind: Arc<TileType>,
        at: Coords,
    ) -> Result<Arc<TileType>, BoardError> {
        let tile = self.tile_mut(at).ok_or(BoardError::OutOfBounds)?;
        tile.modify(kind)
    }

    pub fn modify(&mut self, kind: Arc<TileType>, at: Coords) -> bool {
        self.try_modify(kind, at).is_ok()
    }
}
