use std::collections::VecDeque;

use crate::state::EntityId;

/// Round-robin queue of agents.
///
/// The front of the queue is the entity whose turn is being resolved. Agents
/// join at the back when spawned and leave as soon as they are destroyed, so
/// a destroyed entity never receives another turn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnManager {
    queue: VecDeque<EntityId>,
}

impl TurnManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entity that acts next, if any agent is alive.
    pub fn current(&self) -> Option<EntityId> {
        self.queue.front().copied()
    }

    /// Rotates the current entity to the back and returns the new current one.
    pub fn advance(&mut self) -> Option<EntityId> {
        self.queue.rotate_left(1.min(self.queue.len()));
        self.current()
    }

    /// Ends `actor`'s turn.
    ///
    /// Rotates only when `actor` is still at the front. If the actor was
    /// destroyed during its own turn the next agent already moved up, and
    /// rotating again would skip it.
    pub(crate) fn end_turn(&mut self, actor: EntityId) -> Option<EntityId> {
        if self.current() == Some(actor) {
            self.advance()
        } else {
            self.current()
        }
    }

    /// Appends `entity` to the end of the rotation. Returns `false` if it was
    /// already scheduled.
    pub fn push(&mut self, entity: EntityId) -> bool {
        if self.contains(entity) {
            return false;
        }
        self.queue.push_back(entity);
        true
    }

    /// Removes `entity` from the rotation, keeping everyone else's order.
    pub fn remove(&mut self, entity: EntityId) -> bool {
        match self.queue.iter().position(|id| *id == entity) {
            Some(index) => {
                self.queue.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, entity: EntityId) -> bool {
        self.queue.contains(&entity)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Agents in turn order, starting with the current one.
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.queue.iter().copied()
    }
}
