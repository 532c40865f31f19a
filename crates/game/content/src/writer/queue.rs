use std::collections::{BTreeMap, VecDeque};

use tactics_core::{DefinitionError, DefinitionKind, DefinitionRef};

/// Breadth-first queue of definitions waiting to be written.
///
/// Each `(kind, id)` pair is enqueued at most once. Enqueuing a different
/// definition under an id that was already seen is a
/// [`DefinitionError::DuplicateId`].
#[derive(Debug, Default)]
pub struct SerializationQueue<'a> {
    pending: VecDeque<DefinitionRef<'a>>,
    discovered: BTreeMap<(DefinitionKind, &'a str), DefinitionRef<'a>>,
}

impl<'a> SerializationQueue<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues `definition` unless it was already discovered.
    ///
    /// Returns `Ok(true)` when newly enqueued and `Ok(false)` when the same
    /// definition was seen before.
    pub fn enqueue(&mut self, definition: DefinitionRef<'a>) -> Result<bool, DefinitionError> {
        let kind = definition.kind();
        let id = definition.id();
        if id.is_empty() {
            return Err(DefinitionError::MissingId { kind });
        }

        if let Some(present) = self.discovered.get(&(kind, id)) {
            if present.conflicts_with(&definition) {
                return Err(DefinitionError::DuplicateId {
                    kind,
                    id: id.to_owned(),
                });
            }
            return Ok(false);
        }

        self.discovered.insert((kind, id), definition);
        self.pending.push_back(definition);
        Ok(true)
    }

    pub fn dequeue(&mut self) -> Option<DefinitionRef<'a>> {
        self.pending.pop_front()
    }

    /// Number of definitions still waiting to be written.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of distinct definitions seen so far, written or not.
    pub fn discovered(&self) -> usize {
        self.discovered.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tactics_core::{EntityType, MovementDomain, TileType};

    use super::*;

    #[test]
    fn enqueues_each_definition_once() {
        let wall = Arc::new(TileType::new("wall"));
        let same_wall = Arc::new(TileType::new("wall"));
        let mut queue = SerializationQueue::new();

        assert_eq!(queue.enqueue(DefinitionRef::TileType(&wall)), Ok(true));
        assert_eq!(queue.enqueue(DefinitionRef::TileType(&same_wall)), Ok(false));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.discovered(), 1);
    }

    #[test]
    fn ids_are_scoped_per_kind() {
        let tile = Arc::new(TileType::new("stone"));
        let entity = Arc::new(EntityType::new("stone", MovementDomain::Ground));
        let mut queue = SerializationQueue::new();

        assert_eq!(queue.enqueue(DefinitionRef::TileType(&tile)), Ok(true));
        assert_eq!(queue.enqueue(DefinitionRef::EntityType(&entity)), Ok(true));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn conflicting_definitions_are_rejected() {
        let open = Arc::new(TileType::new("door"));
        let shut = Arc::new(TileType::new("door").blocking(true, true));
        let mut queue = SerializationQueue::new();

        queue.enqueue(DefinitionRef::TileType(&open)).unwrap();
        assert_eq!(
            queue.enqueue(DefinitionRef::TileType(&shut)),
            Err(DefinitionError::DuplicateId {
                kind: DefinitionKind::TileType,
                id: "door".to_owned(),
            })
        );
    }

    #[test]
    fn empty_ids_are_rejected() {
        let unnamed = Arc::new(TileType::new(""));
        let mut queue = SerializationQueue::new();

        assert_eq!(
            queue.enqueue(DefinitionRef::TileType(&unnamed)),
            Err(DefinitionError::MissingId {
                kind: DefinitionKind::TileType
            })
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn dequeues_in_discovery_order() {
        let a = Arc::new(TileType::new("a"));
        let b = Arc::new(TileType::new("b"));
        let mut queue = SerializationQueue::new();
        queue.enqueue(DefinitionRef::TileType(&b)).unwrap();
        queue.enqueue(DefinitionRef::TileType(&a)).unwrap();

        let order: Vec<_> = std::iter::from_fn(|| queue.dequeue())
            .map(|def| def.id())
            .collect();
        assert_eq!(order, vec!["b", "a"]);
    }
}
