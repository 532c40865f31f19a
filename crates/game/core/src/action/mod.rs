//! Action domain: abilities, effects and the executor that applies them.
//!
//! # Module Structure
//!
//! - `ability`: Named effect sequences and the cast entry point
//! - `amount`: Damage/healing amounts with ordered modifiers
//! - `effect`: Effect grammar (leaf mutations and combinators)
//! - `error`: Target resolution errors
//! - `executor`: The only code path that mutates board and entity state
//! - `targeting`: Scoped per-cast name-to-target registry

pub mod ability;
pub mod amount;
pub mod effect;
pub mod error;
pub mod executor;
pub mod targeting;

pub use ability::Ability;
pub use amount::{ActionAmount, Modifier};
pub use effect::{
    AreaTargetEffect, DamageEffect, DestructionEffect, Effect, EffectKind, GroupEffect,
    HealingEffect, ModificationEffect, MovementEffect, ProjectileEffect, SpawnEffect,
    cast_sequence,
};
pub use error::TargetError;
pub use executor::ActionExecutor;
pub use targeting::{Location, Target, TargetDb, TargetKind};
