//! Per-step resolution context.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::action::{ActionAmount, ActionExecutor, Location};
use crate::config::EngineConfig;
use crate::log::{CombinedLog, Log};
use crate::state::{Board, Coords, EntityId, EntityType, GameState, TileType};

use super::errors::CastError;
use super::event::Event;
use super::stack::EventStack;
use super::turns::TurnManager;

/// Everything an effect may touch while one cast or turn step resolves.
///
/// Bundles the event stack, the executor (and through it the game state) and
/// the turn manager. The stack is empty whenever control is outside
/// [`EventContext::process`].
pub struct EventContext<'a> {
    stack: EventStack,
    executor: ActionExecutor<'a>,
    turns: &'a mut TurnManager,
}

impl<'a> EventContext<'a> {
    pub fn new(state: &'a mut GameState, turns: &'a mut TurnManager, config: &EngineConfig) -> Self {
        Self {
            stack: EventStack::new(config.max_cascade_depth),
            executor: ActionExecutor::new(state),
            turns,
        }
    }

    pub fn state(&self) -> &GameState {
        self.executor.state()
    }

    pub fn board(&self) -> &Board {
        self.executor.state().board()
    }

    pub fn turns(&self) -> &TurnManager {
        self.turns
    }

    pub fn stack(&self) -> &EventStack {
        &self.stack
    }

    /// Current coordinates of a location. `None` for an entity not on the board.
    pub fn locate(&self, location: Location) -> Option<Coords> {
        match location {
            Location::Entity(id) => self.board().coords(id),
            Location::Coords(coords) => Some(coords),
        }
    }

    /// Resolves `event` and every reaction it triggers.
    ///
    /// Returns `None` when nothing happened, the single log when only the
    /// event itself produced one, and otherwise a sequential combined log with
    /// the event's log first followed by its reactions in resolution order.
    /// On error the remaining frames are discarded; earlier mutations stay.
    pub fn process(&mut self, event: Event) -> Result<Option<Log>, CastError> {
        let base = self.stack.len();
        self.stack.push(event, 0)?;

        let mut logs = Vec::new();
        let mut reactions = Vec::new();

        while self.stack.len() > base {
            let Some(frame) = self.stack.pop() else {
                break;
            };
            debug!(
                target: "tactics::cascade",
                event = frame.event.as_ref(),
                depth = frame.depth,
                "resolving event"
            );

            if let Some(log) = frame
                .event
                .invoke(&mut self.executor, self.turns, &mut reactions)
            {
                logs.push(log);
            }

            for reaction in reactions.drain(..).rev() {
                trace!(
                    target: "tactics::cascade",
                    event = reaction.as_ref(),
                    depth = frame.depth + 1,
                    "queued reaction"
                );
                if let Err(error) = self.stack.push(reaction, frame.depth + 1) {
                    self.stack.truncate(base);
                    return Err(error);
                }
            }
        }

        Ok(match logs.len() {
            0 => None,
            1 => logs.pop(),
            _ => Some(Log::Combined(CombinedLog {
                parallel: false,
                logs,
            })),
        })
    }

    pub fn damage(
        &mut self,
        target: EntityId,
        amount: &ActionAmount,
        attacker: Option<EntityId>,
    ) -> Result<Option<Log>, CastError> {
        self.process(Event::Damage {
            target,
            amount: amount.clone(),
            attacker,
        })
    }

    pub fn heal(
        &mut self,
        target: EntityId,
        amount: &ActionAmount,
        healer: Option<EntityId>,
    ) -> Result<Option<Log>, CastError> {
        self.process(Event::Heal {
            target,
            amount: amount.clone(),
            healer,
        })
    }

    pub fn destroy(&mut self, entity: EntityId) -> Result<Option<Log>, CastError> {
        self.process(Event::Destroy { entity })
    }

    pub fn spawn(&mut self, kind: &Arc<EntityType>, at: Coords) -> Result<Option<Log>, CastError> {
        self.process(Event::Spawn {
            kind: Arc::clone(kind),
            at,
        })
    }

    pub fn move_entity(
        &mut self,
        entity: EntityId,
        to: Coords,
        relative: bool,
    ) -> Result<Option<Log>, CastError> {
        self.process(Event::Move {
            entity,
            to,
            relative,
        })
    }

    pub fn modify(&mut self, kind: &Arc<TileType>, at: Coords) -> Result<Option<Log>, CastError> {
        self.process(Event::Modify {
            kind: Arc::clone(kind),
            at,
        })
    }

    pub fn projectile(
        &mut self,
        source: Location,
        target: Location,
    ) -> Result<Option<Log>, CastError> {
        self.process(Event::Projectile { source, target })
    }
}
