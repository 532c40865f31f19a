//! Deterministic turn-based tactics core.
//!
//! `tactics-core` resolves abilities made of nested effects against a board of
//! entities. Every cast mutates state eagerly through the
//! [`action::ActionExecutor`] and returns a [`log::Log`] tree describing what
//! happened. [`engine::Game`] is the entry point; supporting crates depend on
//! the types re-exported here.
pub mod action;
pub mod config;
pub mod content;
pub mod engine;
pub mod error;
pub mod log;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use action::{
    Ability, ActionAmount, ActionExecutor, AreaTargetEffect, DamageEffect, DestructionEffect,
    Effect, EffectKind, GroupEffect, HealingEffect, Location, ModificationEffect, Modifier,
    MovementEffect, ProjectileEffect, SpawnEffect, Target, TargetDb, TargetError, TargetKind,
};
pub use config::EngineConfig;
pub use content::{
    ContentBundle, DefinitionError, DefinitionKind, DefinitionRef, Describe, FieldValue,
    FieldVisitor, Identifiable,
};
pub use engine::{CastError, Event, EventContext, EventStack, Game, TurnManager};
pub use error::{ErrorSeverity, GameError};
pub use log::{
    AbilityLog, CombinedLog, DamageLog, DestructionLog, HealingLog, Log, ModificationLog,
    MovementLog, ProjectileLog, SpawnLog,
};
pub use state::{
    Board, BoardError, Coords, EntitiesState, Entity, EntityId, EntityType, GameState, Layers,
    MovementDomain, Size, StateError, Tile, TileType,
};
