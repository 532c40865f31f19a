use bitflags::bitflags;
use std::sync::Arc;

use super::EntityId;
use crate::state::BoardError;

/// Immutable tile descriptor shared by reference across many tiles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileType {
    pub id: String,
    pub name: String,
    pub blocks_ground: bool,
    pub blocks_air: bool,
    /// Opaque tag for presentation layers. Never read by the engine.
    pub visuals: String,
}

impl TileType {
    /// Creates an open tile type whose display name equals its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn blocking(mut self, ground: bool, air: bool) -> Self {
        self.blocks_ground = ground;
        self.blocks_air = air;
        self
    }

    pub fn with_visuals(mut self, visuals: impl Into<String>) -> Self {
        self.visuals = visuals.into();
        self
    }

    /// Occupancy layers no entity may claim on a tile of this type.
    pub fn blocked_layers(&self) -> Layers {
        let mut layers = Layers::empty();
        layers.set(Layers::GROUND, self.blocks_ground);
        layers.set(Layers::AIR, self.blocks_air);
        layers
    }
}

bitflags! {
    /// Occupancy layers claimed by entities and blocked by tile types.
    ///
    /// Two entities conflict when their layers intersect; an entity that claims
    /// no layer (a ghost) never conflicts with anything.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Layers: u8 {
        const GROUND = 1 << 0;
        const AIR    = 1 << 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Occupant {
    id: EntityId,
    layers: Layers,
}

/// Mutable board cell: current tile type plus the entities standing on it.
///
/// Occupants are kept in insertion order so iteration is deterministic. There
/// is no capacity limit: only the layer rule rejects an occupant.
#[derive(Clone, Debug)]
pub struct Tile {
    kind: Arc<TileType>,
    occupants: Vec<Occupant>,
}

impl Tile {
    pub fn new(kind: Arc<TileType>) -> Self {
        Self {
            kind,
            occupants: Vec::new(),
        }
    }

    pub fn kind(&self) -> &Arc<TileType> {
        &self.kind
    }

    pub fn occupants(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.occupants.iter().map(|occupant| occupant.id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.occupants.iter().any(|occupant| occupant.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Union of the layers claimed by every current occupant.
    pub fn occupied_layers(&self) -> Layers {
        self.occupants
            .iter()
            .fold(Layers::empty(), |acc, occupant| acc | occupant.layers)
    }

    pub(crate) fn check_add(&self, layers: Layers) -> Result<(), BoardError> {
        if self.kind.blocked_layers().intersects(layers) {
            return Err(BoardError::Blocked);
        }
        if self.occupied_layers().intersects(layers) {
            return Err(BoardError::Occupied);
        }
        Ok(())
    }

    pub(crate) fn add(&mut self, id: EntityId, layers: Layers) -> Result<(), BoardError> {
        self.check_add(layers)?;
        self.occupants.push(Occupant { id, layers });
        Ok(())
    }

    pub(crate) fn remove(&mut self, id: EntityId) -> bool {
        match self.occupants.iter().position(|occupant| occupant.id == id) {
            Some(index) => {
                self.occupants.remove(index);
                true
            }
            None => false,
        }
    }

    pub(crate) fn check_modify(&self, kind: &TileType) -> Result<(), BoardError> {
        if kind.blocked_layers().intersects(self.occupied_layers()) {
            return Err(BoardError::Blocked);
        }
        Ok(())
    }

    /// Swaps the tile type, keeping occupants. Returns the previous type.
    pub(crate) fn modify(&mut self, kind: Arc<TileType>) -> Result<Arc<TileType>, BoardError> {
        self.check_modify(&kind)?;
        Ok(std::mem::replace(&mut self.kind, kind))
    }
}
