//! Turn sequencing and the cast pipeline.
//!
//! [`Game`] is the entry point: it owns the state, the turn order and the
//! content, and resolves one ability cast at a time. All state mutations flow
//! through an [`EventContext`] built for the duration of a single cast, whose
//! event stack is drained before the cast returns.

mod context;
mod errors;
mod event;
mod stack;
mod turns;

pub use context::EventContext;
pub use errors::CastError;
pub use event::Event;
pub use stack::{EventStack, Frame};
pub use turns::TurnManager;

use std::sync::Arc;

use tracing::{debug, warn};

use crate::action::{Target, TargetDb, TargetError};
use crate::config::EngineConfig;
use crate::content::{ContentBundle, DefinitionError};
use crate::error::GameError;
use crate::log::Log;
use crate::state::{Board, Coords, EntityId, GameState};

/// A running game.
pub struct Game {
    content: ContentBundle,
    config: EngineConfig,
    state: GameState,
    turns: TurnManager,
}

impl Game {
    /// Validates `content` and builds an empty board from its size and default tile.
    pub fn new(content: ContentBundle, config: EngineConfig) -> Result<Self, DefinitionError> {
        content.validate()?;
        let board = Board::new(content.size, Arc::clone(&content.default_tile));
        debug!(
            target: "tactics::engine",
            bundle = %content.id,
            size = %content.size,
            max_cascade_depth = config.max_cascade_depth,
            "game created"
        );

        Ok(Self {
            content,
            config,
            state: GameState::new(board),
            turns: TurnManager::new(),
        })
    }

    pub fn content(&self) -> &ContentBundle {
        &self.content
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn turns(&self) -> &TurnManager {
        &self.turns
    }

    /// Entity whose turn it is.
    pub fn current_actor(&self) -> Option<EntityId> {
        self.turns.current()
    }

    fn run<T>(
        &mut self,
        step: impl FnOnce(&mut EventContext<'_>) -> Result<T, CastError>,
    ) -> Result<T, CastError> {
        let mut ctx = EventContext::new(&mut self.state, &mut self.turns, &self.config);
        let result = step(&mut ctx);
        debug_assert!(ctx.stack().is_empty(), "event stack not drained");
        result
    }

    /// Places a new entity of the registered type `kind` at `at`.
    ///
    /// Goes through the same event pipeline as a spawn effect, so agents join
    /// the turn order. Returns `Ok(None)` when the placement is rejected.
    pub fn spawn(&mut self, kind: &str, at: Coords) -> Result<Option<EntityId>, CastError> {
        let entity_type = self
            .content
            .entity_type(kind)
            .cloned()
            .ok_or_else(|| CastError::UnknownEntityType { id: kind.to_owned() })?;

        let log = self.run(|ctx| ctx.spawn(&entity_type, at))?;
        Ok(match log {
            Some(Log::Spawn(spawn)) => Some(spawn.entity),
            _ => None,
        })
    }

    /// Casts the registered ability `ability_id` as `caster`.
    ///
    /// Mutations are applied eagerly. On a fatal error the cast stops;
    /// effects resolved before the failure are kept. A caster that no longer
    /// exists is reported as a missing `caster` binding.
    pub fn cast(
        &mut self,
        ability_id: &str,
        caster: EntityId,
        target: Option<Target>,
    ) -> Result<Log, CastError> {
        let ability = self
            .content
            .ability(ability_id)
            .cloned()
            .ok_or_else(|| CastError::unknown_ability(ability_id))?;
        if self.state.entity(caster).is_none() {
            return Err(TargetError::missing(TargetDb::CASTER).into());
        }

        self.run(|ctx| ability.cast(caster, target, ctx))
            .inspect_err(|error| {
                warn!(
                    target: "tactics::engine",
                    ability = ability_id,
                    caster = %caster,
                    code = error.error_code(),
                    %error,
                    "cast aborted"
                );
            })
    }

    /// Casts as the current actor, then hands the turn to the next agent.
    ///
    /// The turn only advances after the cast, including every cascaded event,
    /// has resolved. On error the same actor keeps the turn.
    pub fn take_turn(&mut self, ability_id: &str, target: Option<Target>) -> Result<Log, CastError> {
        let actor = self.turns.current().ok_or(CastError::NoActiveTurn)?;
        let log = self.cast(ability_id, actor, target)?;
        let next = self.turns.end_turn(actor);
        debug!(target: "tactics::engine", actor = %actor, next = ?next, "turn complete");
        Ok(log)
    }

    /// Ends the current actor's turn without acting.
    pub fn pass_turn(&mut self) -> Result<Option<EntityId>, CastError> {
        let actor = self.turns.current().ok_or(CastError::NoActiveTurn)?;
        Ok(self.turns.end_turn(actor))
    }
}
