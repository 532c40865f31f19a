//! Effects that create entities or reshape tiles.

use std::sync::Arc;

use tracing::debug;

use crate::action::targeting::TargetDb;
use crate::engine::{CastError, EventContext};
use crate::log::Log;
use crate::state::{EntityType, TileType};

/// Replace the tile type at the location bound to `at`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModificationEffect {
    pub at: String,
    pub tile_type: Arc<TileType>,
}

impl ModificationEffect {
    pub fn new(at: impl Into<String>, tile_type: Arc<TileType>) -> Self {
        Self {
            at: at.into(),
            tile_type,
        }
    }

    pub fn cast(
        &self,
        targets: &mut TargetDb<'_>,
        ctx: &mut EventContext<'_>,
    ) -> Result<Option<Log>, CastError> {
        let Some(at) = ctx.locate(targets.location(&self.at)?) else {
            return Ok(None);
        };
        debug!(target: "tactics::effect", at = %at, kind = %self.tile_type.id, "casting modification");
        ctx.modify(&self.tile_type, at)
    }
}

/// Create an entity at the location bound to `at`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnEffect {
    pub at: String,
    pub entity_type: Arc<EntityType>,
}

impl SpawnEffect {
    pub fn new(at: impl Into<String>, entity_type: Arc<EntityType>) -> Self {
        Self {
            at: at.into(),
            entity_type,
        }
    }

    pub fn cast(
        &self,
        targets: &mut TargetDb<'_>,
        ctx: &mut EventContext<'_>,
    ) -> Result<Option<Log>, CastError> {
        let Some(at) = ctx.locate(targets.location(&self.at)?) else {
            return Ok(None);
        };
        debug!(target: "tactics::effect", at = %at, kind = %self.entity_type.id, "casting spawn");
        ctx.spawn(&self.entity_type, at)
    }
}
