//! Structured record of what a cast did.
//!
//! Every executor mutation returns one leaf log; combinators and abilities
//! assemble leaves into [`CombinedLog`] trees. The tree is the only artifact a
//! presentation layer needs to narrate a turn, and it is matched exhaustively:
//! eight leaf kinds plus one combining kind.

use std::sync::Arc;

use crate::action::Location;
use crate::state::{Coords, Entity, EntityId, EntityType, TileType};

#[derive(Clone, Debug, PartialEq, Eq, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Log {
    Ability(AbilityLog),
    Spawn(SpawnLog),
    Movement(MovementLog),
    Destruction(DestructionLog),
    Modification(ModificationLog),
    Damage(DamageLog),
    Healing(HealingLog),
    Projectile(ProjectileLog),
    Combined(CombinedLog),
}

impl Log {
    /// Stable snake_case name of the variant.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    pub fn as_combined(&self) -> Option<&CombinedLog> {
        match self {
            Self::Combined(combined) => Some(combined),
            _ => None,
        }
    }

    /// Leaf logs in depth-first order.
    pub fn leaves(&self) -> Vec<&Log> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Log>) {
        match self {
            Self::Combined(combined) => {
                for log in combined.iter() {
                    log.collect_leaves(out);
                }
            }
            leaf => out.push(leaf),
        }
    }
}

/// An agent started casting an ability.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbilityLog {
    pub caster: EntityId,
    pub ability: String,
    pub name: String,
    /// Primary target, when the cast was given one.
    pub target: Option<Location>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnLog {
    pub entity: EntityId,
    pub kind: Arc<EntityType>,
    pub at: Coords,
}

/// `from == to` when the entity was asked to move onto its own tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MovementLog {
    pub entity: EntityId,
    pub from: Coords,
    pub to: Coords,
}

/// Carries the removed entity as it was at the moment of destruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DestructionLog {
    pub entity: Entity,
    pub at: Coords,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModificationLog {
    pub at: Coords,
    pub previous_type: Arc<TileType>,
    pub new_type: Arc<TileType>,
}

/// `damage` is the nominal amount; `actual_damage` is what health absorbed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DamageLog {
    pub attacker: Option<EntityId>,
    pub target: EntityId,
    pub damage: u32,
    pub actual_damage: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HealingLog {
    pub healer: Option<EntityId>,
    pub target: EntityId,
    pub healing: u32,
    pub actual_healing: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectileLog {
    pub source: Location,
    pub target: Location,
}

/// Ordered child logs.
///
/// `parallel` tells narrators the children may be presented as simultaneous.
/// Execution order is always the order of `logs`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CombinedLog {
    pub parallel: bool,
    pub logs: Vec<Log>,
}

impl CombinedLog {
    pub fn new(parallel: bool) -> Self {
        Self {
            parallel,
            logs: Vec::new(),
        }
    }

    pub fn sequential() -> Self {
        Self::new(false)
    }

    pub fn parallel() -> Self {
        Self::new(true)
    }

    /// Appends a child log. `None` (an operation with no effect) is skipped.
    pub fn push(&mut self, log: impl Into<Option<Log>>) {
        if let Some(log) = log.into() {
            self.logs.push(log);
        }
    }

    pub fn len(&self) -> usize {
        self.logs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Log> {
        self.logs.iter()
    }
}

macro_rules! impl_from_leaf {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Log {
                fn from(log: $ty) -> Self {
                    Self::$variant(log)
                }
            }
        )*
    };
}

impl_from_leaf!(
    Ability(AbilityLog),
    Spawn(SpawnLog),
    Movement(MovementLog),
    Destruction(DestructionLog),
    Modification(ModificationLog),
    Damage(DamageLog),
    Healing(HealingLog),
    Projectile(ProjectileLog),
    Combined(CombinedLog),
);
