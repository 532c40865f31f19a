use std::collections::BTreeSet;
use std::sync::Arc;

use crate::action::{Ability, Effect};
use crate::state::{EntityType, Size, TileType};

use super::{DefinitionError, DefinitionKind, Identifiable};

/// Everything needed to start a game: board extent, tile palette, entity
/// types and abilities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentBundle {
    pub id: String,
    pub size: Size,
    /// Tile type every board cell starts with. Also listed in `tile_types`.
    pub default_tile: Arc<TileType>,
    pub tile_types: Vec<Arc<TileType>>,
    pub entity_types: Vec<Arc<EntityType>>,
    pub abilities: Vec<Arc<Ability>>,
}

impl ContentBundle {
    pub fn new(id: impl Into<String>, size: Size, default_tile: TileType) -> Self {
        let default_tile = Arc::new(default_tile);
        Self {
            id: id.into(),
            size,
            tile_types: vec![Arc::clone(&default_tile)],
            default_tile,
            entity_types: Vec::new(),
            abilities: Vec::new(),
        }
    }

    pub fn with_tile_type(mut self, tile_type: TileType) -> Self {
        self.tile_types.push(Arc::new(tile_type));
        self
    }

    pub fn with_entity_type(mut self, entity_type: EntityType) -> Self {
        self.entity_types.push(Arc::new(entity_type));
        self
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(Arc::new(ability));
        self
    }

    pub fn tile_type(&self, id: &str) -> Option<&Arc<TileType>> {
        self.tile_types.iter().find(|def| def.id == id)
    }

    pub fn entity_type(&self, id: &str) -> Option<&Arc<EntityType>> {
        self.entity_types.iter().find(|def| def.id == id)
    }

    pub fn ability(&self, id: &str) -> Option<&Arc<Ability>> {
        self.abilities.iter().find(|def| def.id == id)
    }

    /// Checks identities and cross references.
    ///
    /// Every id must be non-empty and unique within its kind, and every tile or
    /// entity type an effect refers to must be registered in the bundle with
    /// identical content.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if self.id.is_empty() {
            return Err(DefinitionError::MissingId {
                kind: DefinitionKind::Bundle,
            });
        }
        unique_ids(&self.tile_types)?;
        unique_ids(&self.entity_types)?;
        unique_ids(&self.abilities)?;

        self.check_tile_type(&self.default_tile)?;
        for ability in &self.abilities {
            self.check_effects(&ability.effects)?;
        }
        Ok(())
    }

    fn check_tile_type(&self, tile_type: &TileType) -> Result<(), DefinitionError> {
        match self.tile_type(&tile_type.id) {
            Some(registered) if registered.as_ref() == tile_type => Ok(()),
            _ => Err(DefinitionError::UnknownReference {
                kind: DefinitionKind::TileType,
                id: tile_type.id.clone(),
            }),
        }
    }

    fn check_entity_type(&self, entity_type: &EntityType) -> Result<(), DefinitionError> {
        match self.entity_type(&entity_type.id) {
            Some(registered) if registered.as_ref() == entity_type => Ok(()),
            _ => Err(DefinitionError::UnknownReference {
                kind: DefinitionKind::EntityType,
                id: entity_type.id.clone(),
            }),
        }
    }

    fn check_effects(&self, effects: &[Effect]) -> Result<(), DefinitionError> {
        for effect in effects {
            match effect {
                Effect::Modification(modification) => {
                    self.check_tile_type(&modification.tile_type)?
                }
                Effect::Spawn(spawn) => self.check_entity_type(&spawn.entity_type)?,
                Effect::Group(group) => self.check_effects(&group.effects)?,
                _ => {}
            }
        }
        Ok(())
    }
}

fn unique_ids<T: Identifiable>(definitions: &[Arc<T>]) -> Result<(), DefinitionError> {
    let mut seen = BTreeSet::new();
    for definition in definitions {
        let id = definition.id();
        if id.is_empty() {
            return Err(DefinitionError::MissingId { kind: T::KIND });
        }
        if !seen.insert(id) {
            return Err(DefinitionError::DuplicateId {
                kind: T::KIND,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}
