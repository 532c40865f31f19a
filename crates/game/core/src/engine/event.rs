//! Events resolved by the cascade.
//!
//! Effects never call the executor directly; they submit an [`Event`] to the
//! [`EventContext`](super::EventContext). Invoking an event performs exactly
//! one executor operation and may queue follow-up reactions, such as the
//! destruction of an entity whose health reached zero.

use std::sync::Arc;

use crate::action::{ActionAmount, ActionExecutor, Location};
use crate::log::Log;
use crate::state::{Coords, EntityId, EntityType, TileType};

use super::turns::TurnManager;

#[derive(Clone, Debug, PartialEq, Eq, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Event {
    Damage {
        target: EntityId,
        amount: ActionAmount,
        attacker: Option<EntityId>,
    },
    Heal {
        target: EntityId,
        amount: ActionAmount,
        healer: Option<EntityId>,
    },
    Destroy {
        entity: EntityId,
    },
    Spawn {
        kind: Arc<EntityType>,
        at: Coords,
    },
    Move {
        entity: EntityId,
        to: Coords,
        relative: bool,
    },
    Modify {
        kind: Arc<TileType>,
        at: Coords,
    },
    Projectile {
        source: Location,
        target: Location,
    },
    /// Does nothing but queue `reactions`, in order.
    #[cfg(test)]
    Relay {
        reactions: Vec<Event>,
    },
}

impl Event {
    /// Performs the event and appends any reactions it triggers to `reactions`.
    ///
    /// Reactions are returned in the order they should resolve.
    pub(crate) fn invoke(
        self,
        executor: &mut ActionExecutor<'_>,
        turns: &mut TurnManager,
        reactions: &mut Vec<Event>,
    ) -> Option<Log> {
        match self {
            Event::Damage {
                target,
                amount,
                attacker,
            } => {
                let log = executor.damage(target, &amount, attacker)?;
                let defeated = executor
                    .state()
                    .entity(target)
                    .is_some_and(|entity| !entity.is_alive());
                if defeated {
                    reactions.push(Event::Destroy { entity: target });
                }
                Some(log.into())
            }
            Event::Heal {
                target,
                amount,
                healer,
            } => executor.heal(target, &amount, healer).map(Log::from),
            Event::Destroy { entity } => {
                let log = executor.destroy(entity)?;
                turns.remove(entity);
                Some(log.into())
            }
            Event::Spawn { kind, at } => {
                let log = executor.spawn(&kind, at)?;
                if kind.is_agent {
                    turns.push(log.entity);
                }
                Some(log.into())
            }
            Event::Move {
                entity,
                to,
                relative,
            } => executor.move_entity(entity, to, relative).map(Log::from),
            Event::Modify { kind, at } => executor.modify(&kind, at).map(Log::from),
            Event::Projectile { source, target } => {
                Some(executor.projectile(source, target).into())
            }
            #[cfg(test)]
            Event::Relay {
                reactions: queued,
            } => {
                reactions.extend(queued);
                None
            }
        }
    }
}
