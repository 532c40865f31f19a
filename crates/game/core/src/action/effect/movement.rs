//! Movement and projectile effects.

use tracing::debug;

use crate::action::targeting::TargetDb;
use crate::engine::{CastError, EventContext};
use crate::log::Log;

/// Move the entity bound to `entity`.
///
/// When `relative`, `to` must name a coordinate used as an offset from the
/// entity's current position. Otherwise `to` may name a coordinate or an
/// entity, whose tile becomes the destination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovementEffect {
    pub entity: String,
    pub to: String,
    pub relative: bool,
}

impl MovementEffect {
    pub fn to(entity: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            to: to.into(),
            relative: false,
        }
    }

    pub fn by(entity: impl Into<String>, offset: impl Into<String>) -> Self {
        Self {
            relative: true,
            ..Self::to(entity, offset)
        }
    }

    pub fn cast(
        &self,
        targets: &mut TargetDb<'_>,
        ctx: &mut EventContext<'_>,
    ) -> Result<Option<Log>, CastError> {
        let entity = targets.entity(&self.entity)?;
        let to = if self.relative {
            targets.coords(&self.to)?
        } else {
            match ctx.locate(targets.location(&self.to)?) {
                Some(coords) => coords,
                None => return Ok(None),
            }
        };

        debug!(target: "tactics::effect", entity = %entity, to = %to, relative = self.relative, "casting movement");
        ctx.move_entity(entity, to, self.relative)
    }
}

/// Launch a projectile between two locations. Purely presentational.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectileEffect {
    pub source: String,
    pub target: String,
}

impl ProjectileEffect {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    pub fn cast(
        &self,
        targets: &mut TargetDb<'_>,
        ctx: &mut EventContext<'_>,
    ) -> Result<Option<Log>, CastError> {
        let source = targets.location(&self.source)?;
        let target = targets.location(&self.target)?;
        ctx.projectile(source, target)
    }
}
