//! Combinator effects.

use tracing::{debug, trace};

use super::{Effect, cast_sequence};
use crate::action::targeting::{Target, TargetDb};
use crate::engine::{CastError, EventContext};
use crate::log::{CombinedLog, Log};

/// Cast `effects` once for every member of `group`.
///
/// Each member is bound as `new_target` in a fresh child scope. The result is
/// one sequential log per member, in group order, wrapped in an outer log
/// carrying `parallel`. Members are always resolved one after another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupEffect {
    pub group: String,
    pub new_target: String,
    pub effects: Vec<Effect>,
    pub parallel: bool,
}

impl GroupEffect {
    pub fn new(group: impl Into<String>, new_target: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            new_target: new_target.into(),
            effects: Vec::new(),
            parallel: false,
        }
    }

    pub fn with_effect(mut self, effect: impl Into<Effect>) -> Self {
        self.effects.push(effect.into());
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// A fatal error in one member aborts the rest; members already resolved
    /// keep their changes.
    pub fn cast(
        &self,
        targets: &mut TargetDb<'_>,
        ctx: &mut EventContext<'_>,
    ) -> Result<Option<Log>, CastError> {
        let members = targets.group(&self.group)?.to_vec();
        debug!(
            target: "tactics::effect",
            group = %self.group,
            members = members.len(),
            parallel = self.parallel,
            "casting group"
        );

        let mut log = CombinedLog::new(self.parallel);
        for member in members {
            let mut scope = targets.child();
            scope.bind(self.new_target.as_str(), member)?;

            let iteration = cast_sequence(&self.effects, &mut scope, ctx)?;
            log.push(Log::Combined(iteration));
        }
        Ok(Some(Log::Combined(log)))
    }
}

/// Bind every entity within `radius` of `source` as the group `new_group`.
///
/// Distance is Chebyshev, so the area is a square. A source entity that is
/// not on the board yields an empty group. Produces no log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AreaTargetEffect {
    pub source: String,
    pub radius: u32,
    pub new_group: String,
}

impl AreaTargetEffect {
    pub fn new(source: impl Into<String>, radius: u32, new_group: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            radius,
            new_group: new_group.into(),
        }
    }

    pub fn cast(
        &self,
        targets: &mut TargetDb<'_>,
        ctx: &mut EventContext<'_>,
    ) -> Result<Option<Log>, CastError> {
        let source = targets.location(&self.source)?;
        let members = ctx
            .locate(source)
            .map(|center| ctx.board().entities_within(center, self.radius))
            .unwrap_or_default();

        trace!(
            target: "tactics::effect",
            group = %self.new_group,
            members = members.len(),
            radius = self.radius,
            "area targeted"
        );
        targets.bind(self.new_group.as_str(), Target::Group(members))?;
        Ok(None)
    }
}
