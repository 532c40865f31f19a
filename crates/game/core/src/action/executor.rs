//! Ground-truth mutations.
//!
//! [`ActionExecutor`] is the only code path that changes entity health,
//! placement or tile types. Each operation returns the leaf log describing the
//! change, or `None` when the request was rejected and nothing changed.

use std::sync::Arc;

use tracing::debug;

use super::amount::ActionAmount;
use super::targeting::Location;
use crate::log::{
    DamageLog, DestructionLog, HealingLog, ModificationLog, MovementLog, ProjectileLog, SpawnLog,
};
use crate::state::{Coords, EntityId, EntityType, GameState, TileType};

pub struct ActionExecutor<'a> {
    state: &'a mut GameState,
}

impl<'a> ActionExecutor<'a> {
    pub fn new(state: &'a mut GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    /// Removes up to the resolved amount of health from `target`.
    ///
    /// Logs even when nothing was absorbed; returns `None` only when the
    /// entity does not exist.
    pub fn damage(
        &mut self,
        target: EntityId,
        amount: &ActionAmount,
        attacker: Option<EntityId>,
    ) -> Option<DamageLog> {
        let damage = amount.resolve();
        let entity = self.state.entities.get_mut(target)?;
        let actual_damage = entity.take_damage(damage);

        debug!(
            target: "tactics::executor",
            entity = %target,
            damage,
            actual_damage,
            health = entity.health(),
            "damaged entity"
        );

        Some(DamageLog {
            attacker,
            target,
            damage,
            actual_damage,
        })
    }

    /// Restores up to the resolved amount of health without exceeding the maximum.
    pub fn heal(
        &mut self,
        target: EntityId,
        amount: &ActionAmount,
        healer: Option<EntityId>,
    ) -> Option<HealingLog> {
        let healing = amount.resolve();
        let entity = self.state.entities.get_mut(target)?;
        let actual_healing = entity.restore_health(healing);

        debug!(
            target: "tactics::executor",
            entity = %target,
            healing,
            actual_healing,
            health = entity.health(),
            "healed entity"
        );

        Some(HealingLog {
            healer,
            target,
            healing,
            actual_healing,
        })
    }

    /// Removes `target` from the board and the registry.
    pub fn destroy(&mut self, target: EntityId) -> Option<DestructionLog> {
        let Some((entity, at)) = self.state.destroy_entity(target) else {
            debug!(target: "tactics::executor", entity = %target, "destroy rejected: not on board");
            return None;
        };

        debug!(target: "tactics::executor", entity = %target, at = %at, "destroyed entity");
        Some(DestructionLog { entity, at })
    }

    /// Creates an entity of `kind` at `at`. Nothing is created when placement fails.
    pub fn spawn(&mut self, kind: &Arc<EntityType>, at: Coords) -> Option<SpawnLog> {
        match self.state.spawn_entity(kind, at) {
            Ok(entity) => {
                debug!(target: "tactics::executor", entity = %entity, kind = %kind.id, at = %at, "spawned entity");
                Some(SpawnLog {
                    entity,
                    kind: Arc::clone(kind),
                    at,
                })
            }
            Err(error) => {
                debug!(target: "tactics::executor", kind = %kind.id, at = %at, %error, "spawn rejected");
                None
            }
        }
    }

    /// Moves `target` to `to`, or by `to` when `relative`.
    pub fn move_entity(
        &mut self,
        target: EntityId,
        to: Coords,
        relative: bool,
    ) -> Option<MovementLog> {
        let from = self.state.board.coords(target)?;
        let destination = if relative { from + to } else { to };
        let entity = self.state.entities.get(target)?;

        match self.state.board.try_move(entity, destination) {
            Ok(from) => {
                debug!(target: "tactics::executor", entity = %target, from = %from, to = %destination, "moved entity");
                Some(MovementLog {
                    entity: target,
                    from,
                    to: destination,
                })
            }
            Err(error) => {
                debug!(target: "tactics::executor", entity = %target, to = %destination, %error, "move rejected");
                None
            }
        }
    }

    /// Replaces the tile type at `at`, keeping its occupants.
    pub fn modify(&mut self, kind: &Arc<TileType>, at: Coords) -> Option<ModificationLog> {
        match self.state.board.try_modify(Arc::clone(kind), at) {
            Ok(previous_type) => {
                debug!(
                    target: "tactics::executor",
                    at = %at,
                    previous = %previous_type.id,
                    new = %kind.id,
                    "modified tile"
                );
                Some(ModificationLog {
                    at,
                    previous_type,
                    new_type: Arc::clone(kind),
                })
            }
            Err(error) => {
                debug!(target: "tactics::executor", at = %at, kind = %kind.id, %error, "modify rejected");
                None
            }
        }
    }

    /// Records a projectile travelling from `source` to `target`. Never mutates.
    pub fn projectile(&mut self, source: Location, target: Location) -> ProjectileLog {
        debug!(target: "tactics::executor", from = ?source, to = ?target, "launched projectile");
        ProjectileLog { source, target }
    }
}
