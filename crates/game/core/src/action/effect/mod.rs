//! Effect grammar.
//!
//! An ability is a list of effects. Leaf effects resolve their target names
//! and submit one event to the [`EventContext`]; combinators bind new names and
//! recurse.
//!
//! # Architecture
//!
//! This module uses an **Enum + Struct hybrid** approach:
//! - Individual effect types are structs (`DamageEffect`, `GroupEffect`, ...)
//! - The [`Effect`] enum wraps them and dispatches `cast` with an exhaustive match
//! - [`EffectKind`] is the field-less tag of each variant

mod damage;
mod group;
mod kinds;
mod movement;
mod terrain;

pub use damage::{DamageEffect, DestructionEffect, HealingEffect};
pub use group::{AreaTargetEffect, GroupEffect};
pub use kinds::EffectKind;
pub use movement::{MovementEffect, ProjectileEffect};
pub use terrain::{ModificationEffect, SpawnEffect};

use crate::action::targeting::TargetDb;
use crate::engine::{CastError, EventContext};
use crate::log::{CombinedLog, Log};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Damage(DamageEffect),
    Healing(HealingEffect),
    Destruction(DestructionEffect),
    Modification(ModificationEffect),
    Spawn(SpawnEffect),
    Movement(MovementEffect),
    Projectile(ProjectileEffect),
    Group(GroupEffect),
    AreaTarget(AreaTargetEffect),
}

impl Effect {
    pub fn kind(&self) -> EffectKind {
        EffectKind::from(self)
    }

    /// Resolves the effect against `targets`, applying its changes through `ctx`.
    ///
    /// Returns `Ok(None)` when the effect had nothing to do, for example a
    /// blocked move. Errors are fatal for the enclosing cast.
    pub fn cast(
        &self,
        targets: &mut TargetDb<'_>,
        ctx: &mut EventContext<'_>,
    ) -> Result<Option<Log>, CastError> {
        match self {
            Effect::Damage(effect) => effect.cast(targets, ctx),
            Effect::Healing(effect) => effect.cast(targets, ctx),
            Effect::Destruction(effect) => effect.cast(targets, ctx),
            Effect::Modification(effect) => effect.cast(targets, ctx),
            Effect::Spawn(effect) => effect.cast(targets, ctx),
            Effect::Movement(effect) => effect.cast(targets, ctx),
            Effect::Projectile(effect) => effect.cast(targets, ctx),
            Effect::Group(effect) => effect.cast(targets, ctx),
            Effect::AreaTarget(effect) => effect.cast(targets, ctx),
        }
    }

    /// Nested effects of a combinator.
    pub fn children(&self) -> &[Effect] {
        match self {
            Effect::Group(group) => &group.effects,
            _ => &[],
        }
    }
}

/// Casts `effects` in order into one sequential log.
pub fn cast_sequence(
    effects: &[Effect],
    targets: &mut TargetDb<'_>,
    ctx: &mut EventContext<'_>,
) -> Result<CombinedLog, CastError> {
    let mut log = CombinedLog::sequential();
    for effect in effects {
        log.push(effect.cast(targets, ctx)?);
    }
    Ok(log)
}

macro_rules! impl_from_effect {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Effect {
                fn from(effect: $ty) -> Self {
                    Self::$variant(effect)
                }
            }
        )*
    };
}

impl_from_effect!(
    Damage(DamageEffect),
    Healing(HealingEffect),
    Destruction(DestructionEffect),
    Modification(ModificationEffect),
    Spawn(SpawnEffect),
    Movement(MovementEffect),
    Projectile(ProjectileEffect),
    Group(GroupEffect),
    AreaTarget(AreaTargetEffect),
);
