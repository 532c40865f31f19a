//! Damage and healing effects.

use tracing::debug;

use crate::action::amount::ActionAmount;
use crate::action::targeting::TargetDb;
use crate::engine::{CastError, EventContext};
use crate::log::Log;

/// Deal damage to the entity bound to `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DamageEffect {
    pub target: String,
    /// Name of the entity credited with the damage, if any.
    pub attacker: Option<String>,
    pub amount: ActionAmount,
}

impl DamageEffect {
    pub fn new(target: impl Into<String>, amount: impl Into<ActionAmount>) -> Self {
        Self {
            target: target.into(),
            attacker: None,
            amount: amount.into(),
        }
    }

    pub fn with_attacker(mut self, attacker: impl Into<String>) -> Self {
        self.attacker = Some(attacker.into());
        self
    }

    pub fn cast(
        &self,
        targets: &mut TargetDb<'_>,
        ctx: &mut EventContext<'_>,
    ) -> Result<Option<Log>, CastError> {
        let target = targets.entity(&self.target)?;
        let attacker = self
            .attacker
            .as_deref()
            .map(|name| targets.entity(name))
            .transpose()?;

        debug!(target: "tactics::effect", entity = %target, amount = self.amount.total(), "casting damage");
        ctx.damage(target, &self.amount, attacker)
    }
}

/// Restore health to the entity bound to `target`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealingEffect {
    pub target: String,
    /// Name of the entity credited with the healing, if any.
    pub healer: Option<String>,
    pub amount: ActionAmount,
}

impl HealingEffect {
    pub fn new(target: impl Into<String>, amount: impl Into<ActionAmount>) -> Self {
        Self {
            target: target.into(),
            healer: None,
            amount: amount.into(),
        }
    }

    pub fn with_healer(mut self, healer: impl Into<String>) -> Self {
        self.healer = Some(healer.into());
        self
    }

    pub fn cast(
        &self,
        targets: &mut TargetDb<'_>,
        ctx: &mut EventContext<'_>,
    ) -> Result<Option<Log>, CastError> {
        let target = targets.entity(&self.target)?;
        let healer = self
            .healer
            .as_deref()
            .map(|name| targets.entity(name))
            .transpose()?;

        debug!(target: "tactics::effect", entity = %target, amount = self.amount.total(), "casting healing");
        ctx.heal(target, &self.amount, healer)
    }
}

/// Remove the entity bound to `target` from the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestructionEffect {
    pub target: String,
}

impl DestructionEffect {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
        }
    }

    pub fn cast(
        &self,
        targets: &mut TargetDb<'_>,
        ctx: &mut EventContext<'_>,
    ) -> Result<Option<Log>, CastError> {
        let target = targets.entity(&self.target)?;
        debug!(target: "tactics::effect", entity = %target, "casting destruction");
        ctx.destroy(target)
    }
}
