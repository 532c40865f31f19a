//! Per-cast symbolic target registry.
//!
//! A [`TargetDb`] maps names such as `"caster"` or `"enemies"` to resolved
//! entities, coordinates or groups. Scopes form a chain: combinators open a
//! child scope for each iteration, bind into it, and discard it afterwards, so
//! bindings made while resolving one member never leak to its siblings or to
//! the enclosing cast.

use std::collections::BTreeMap;

use tracing::trace;

use super::error::TargetError;
use crate::state::{Coords, EntityId};

/// Value bound to a target name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Entity(EntityId),
    Coords(Coords),
    /// Ordered entity group; iteration follows insertion order.
    Group(Vec<EntityId>),
}

impl Target {
    pub fn kind(&self) -> TargetKind {
        match self {
            Self::Entity(_) => TargetKind::Entity,
            Self::Coords(_) => TargetKind::Coords,
            Self::Group(_) => TargetKind::Group,
        }
    }
}

impl From<EntityId> for Target {
    fn from(id: EntityId) -> Self {
        Self::Entity(id)
    }
}

impl From<Coords> for Target {
    fn from(coords: Coords) -> Self {
        Self::Coords(coords)
    }
}

impl From<Location> for Target {
    fn from(location: Location) -> Self {
        match location {
            Location::Entity(id) => Self::Entity(id),
            Location::Coords(coords) => Self::Coords(coords),
        }
    }
}

/// Kind of value a name resolves to, used in resolution errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TargetKind {
    Entity,
    Coords,
    Group,
    /// Either an entity or a coordinate.
    Location,
}

/// A point of interest that is either an entity or a fixed coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    Entity(EntityId),
    Coords(Coords),
}

/// Scoped name-to-target registry owned by one cast.
#[derive(Debug, Default)]
pub struct TargetDb<'p> {
    parent: Option<&'p TargetDb<'p>>,
    bindings: BTreeMap<String, Target>,
}

impl<'p> TargetDb<'p> {
    pub const CASTER: &'static str = "caster";
    pub const TARGET: &'static str = "target";

    /// Creates an empty root scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a nested scope whose bindings shadow, but never modify, this one.
    pub fn child(&self) -> TargetDb<'_> {
        TargetDb {
            parent: Some(self),
            bindings: BTreeMap::new(),
        }
    }

    /// Number of enclosing scopes.
    pub fn depth(&self) -> usize {
        self.parent.map_or(0, |parent| parent.depth() + 1)
    }

    /// Binds `name` in this scope.
    ///
    /// A name is write-once per scope; binding a name an ancestor already
    /// holds shadows it for this scope and its children.
    pub fn bind(&mut self, name: impl Into<String>, target: impl Into<Target>) -> Result<(), TargetError> {
        let name = name.into();
        if self.bindings.contains_key(&name) {
            return Err(TargetError::AlreadyBound { name });
        }
        let target = target.into();
        trace!(name = %name, kind = %target.kind(), depth = self.depth(), "bound target");
        self.bindings.insert(name, target);
        Ok(())
    }

    /// Looks `name` up in this scope, then in each ancestor.
    pub fn get(&self, name: &str) -> Option<&Target> {
        self.bindings
            .get(name)
            .or_else(|| self.parent.and_then(|parent| parent.get(name)))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    fn require(&self, name: &str) -> Result<&Target, TargetError> {
        self.get(name).ok_or_else(|| TargetError::missing(name))
    }

    pub fn entity(&self, name: &str) -> Result<EntityId, TargetError> {
        match self.require(name)? {
            Target::Entity(id) => Ok(*id),
            other => Err(TargetError::wrong_kind(name, TargetKind::Entity, other.kind())),
        }
    }

    pub fn coords(&self, name: &str) -> Result<Coords, TargetError> {
        match self.require(name)? {
            Target::Coords(coords) => Ok(*coords),
            other => Err(TargetError::wrong_kind(name, TargetKind::Coords, other.kind())),
        }
    }

    pub fn group(&self, name: &str) -> Result<&[EntityId], TargetError> {
        match self.require(name)? {
            Target::Group(members) => Ok(members),
            other => Err(TargetError::wrong_kind(name, TargetKind::Group, other.kind())),
        }
    }

    /// Resolves a name bound to either an entity or a coordinate.
    pub fn location(&self, name: &str) -> Result<Location, TargetError> {
        match self.require(name)? {
            Target::Entity(id) => Ok(Location::Entity(*id)),
            Target::Coords(coords) => Ok(Location::Coords(*coords)),
            other => Err(TargetError::wrong_kind(name, TargetKind::Location, other.kind())),
        }
    }
}
