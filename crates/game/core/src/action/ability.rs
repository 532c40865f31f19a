use tracing::debug;

use super::effect::{Effect, cast_sequence};
use super::targeting::{Location, Target, TargetDb};
use crate::engine::{CastError, EventContext};
use crate::log::{AbilityLog, CombinedLog, Log};
use crate::state::EntityId;

/// Named, immutable sequence of effects castable by an agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ability {
    pub id: String,
    pub name: String,
    pub effects: Vec<Effect>,
}

impl Ability {
    /// Creates an empty ability whose display name equals its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            effects: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_effect(mut self, effect: impl Into<Effect>) -> Self {
        self.effects.push(effect.into());
        self
    }

    /// Casts the ability with a fresh target database.
    ///
    /// `caster` is bound as [`TargetDb::CASTER`] and `target`, when given, as
    /// [`TargetDb::TARGET`]. The returned log is a sequential combination of
    /// the [`AbilityLog`] followed by the combined log of the effects.
    pub fn cast(
        &self,
        caster: EntityId,
        target: Option<Target>,
        ctx: &mut EventContext<'_>,
    ) -> Result<Log, CastError> {
        let mut targets = TargetDb::new();
        targets.bind(TargetDb::CASTER, caster)?;

        let primary = match target {
            Some(target) => {
                let primary = match &target {
                    Target::Entity(id) => Some(Location::Entity(*id)),
                    Target::Coords(coords) => Some(Location::Coords(*coords)),
                    Target::Group(_) => None,
                };
                targets.bind(TargetDb::TARGET, target)?;
                primary
            }
            None => None,
        };

        debug!(
            target: "tactics::ability",
            ability = %self.id,
            caster = %caster,
            effects = self.effects.len(),
            "casting ability"
        );

        let effects = cast_sequence(&self.effects, &mut targets, ctx)?;

        let mut log = CombinedLog::sequential();
        log.push(Log::Ability(AbilityLog {
            caster,
            ability: self.id.clone(),
            name: self.name.clone(),
            target: primary,
        }));
        log.push(Log::Combined(effects));
        Ok(Log::Combined(log))
    }
}
