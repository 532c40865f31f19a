//! Identity and field schema of content definitions.
//!
//! Persistence collaborators never inspect definition structs directly. Each
//! definition type declares its public fields once, through [`Describe`], and
//! a [`FieldVisitor`] turns them into whatever document format it writes.

use std::sync::Arc;

use crate::action::{
    Ability, ActionAmount, AreaTargetEffect, DamageEffect, DestructionEffect, Effect,
    GroupEffect, HealingEffect, ModificationEffect, MovementEffect, ProjectileEffect, SpawnEffect,
};
use crate::state::{Coords, EntityType, Size, TileType};

use super::ContentBundle;

/// Kind of named definition.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum DefinitionKind {
    Bundle,
    TileType,
    EntityType,
    Ability,
    Effect,
}

impl DefinitionKind {
    /// Directory holding definitions of this kind inside a bundle.
    ///
    /// Bundles live at the bundle root and effects are always inlined.
    pub fn dir(self) -> Option<&'static str> {
        match self {
            Self::TileType => Some("tile_types"),
            Self::EntityType => Some("entity_types"),
            Self::Ability => Some("abilities"),
            Self::Bundle | Self::Effect => None,
        }
    }
}

/// A definition with a stable, non-empty string identity.
pub trait Identifiable {
    const KIND: DefinitionKind;

    fn id(&self) -> &str;
}

impl Identifiable for TileType {
    const KIND: DefinitionKind = DefinitionKind::TileType;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for EntityType {
    const KIND: DefinitionKind = DefinitionKind::EntityType;

    fn id(&self) -> &str {
        &self.id
    }
}

impl Identifiable for Ability {
    const KIND: DefinitionKind = DefinitionKind::Ability;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Effects are identified by their kind tag.
impl Identifiable for Effect {
    const KIND: DefinitionKind = DefinitionKind::Effect;

    fn id(&self) -> &str {
        self.kind().as_str()
    }
}

impl Identifiable for ContentBundle {
    const KIND: DefinitionKind = DefinitionKind::Bundle;

    fn id(&self) -> &str {
        &self.id
    }
}

/// Reference from one definition to another stored on its own.
#[derive(Clone, Copy, Debug)]
pub enum DefinitionRef<'a> {
    TileType(&'a Arc<TileType>),
    EntityType(&'a Arc<EntityType>),
    Ability(&'a Arc<Ability>),
}

impl<'a> DefinitionRef<'a> {
    pub fn kind(&self) -> DefinitionKind {
        match self {
            Self::TileType(_) => DefinitionKind::TileType,
            Self::EntityType(_) => DefinitionKind::EntityType,
            Self::Ability(_) => DefinitionKind::Ability,
        }
    }

    pub fn id(&self) -> &'a str {
        match self {
            Self::TileType(def) => &def.id,
            Self::EntityType(def) => &def.id,
            Self::Ability(def) => &def.id,
        }
    }

    /// Fields of the referenced definition.
    pub fn describe(&self, visitor: &mut dyn FieldVisitor<'a>) {
        match *self {
            Self::TileType(def) => def.as_ref().describe(visitor),
            Self::EntityType(def) => def.as_ref().describe(visitor),
            Self::Ability(def) => def.as_ref().describe(visitor),
        }
    }

    /// Both sides hold the same id but different content.
    pub fn conflicts_with(&self, other: &DefinitionRef<'_>) -> bool {
        match (self, other) {
            (Self::TileType(a), DefinitionRef::TileType(b)) => a.id == b.id && a != b,
            (Self::EntityType(a), DefinitionRef::EntityType(b)) => a.id == b.id && a != b,
            (Self::Ability(a), DefinitionRef::Ability(b)) => a.id == b.id && a != b,
            _ => false,
        }
    }
}

/// A single public field value.
#[derive(Clone, Debug)]
pub enum FieldValue<'a> {
    /// Empty strings mean "unset" and are not persisted.
    Str(&'a str),
    Int(i64),
    Bool(bool),
    Coords(Coords),
    Size(Size),
    Amount(&'a ActionAmount),
    Ref(DefinitionRef<'a>),
    Refs(Vec<DefinitionRef<'a>>),
    /// Nested effects, persisted inline.
    Effects(&'a [Effect]),
}

pub trait FieldVisitor<'a> {
    fn visit(&mut self, name: &'static str, value: FieldValue<'a>);
}

/// Enumerates a definition's public fields, excluding its id.
pub trait Describe {
    fn describe<'a>(&'a self, visitor: &mut dyn FieldVisitor<'a>);
}

impl Describe for TileType {
    fn describe<'a>(&'a self, visitor: &mut dyn FieldVisitor<'a>) {
        visitor.visit("name", FieldValue::Str(&self.name));
        visitor.visit("blocks_ground", FieldValue::Bool(self.blocks_ground));
        visitor.visit("blocks_air", FieldValue::Bool(self.blocks_air));
        visitor.visit("visuals", FieldValue::Str(&self.visuals));
    }
}

impl Describe for EntityType {
    fn describe<'a>(&'a self, visitor: &mut dyn FieldVisitor<'a>) {
        visitor.visit("name", FieldValue::Str(&self.name));
        visitor.visit("domain", FieldValue::Str(self.domain.as_ref()));
        visitor.visit("is_agent", FieldValue::Bool(self.is_agent));
        visitor.visit("max_health", FieldValue::Int(i64::from(self.max_health)));
    }
}

impl Describe for Ability {
    fn describe<'a>(&'a self, visitor: &mut dyn FieldVisitor<'a>) {
        visitor.visit("name", FieldValue::Str(&self.name));
        visitor.visit("effects", FieldValue::Effects(&self.effects));
    }
}

fn optional(name: &Option<String>) -> FieldValue<'_> {
    FieldValue::Str(name.as_deref().unwrap_or_default())
}

impl Describe for Effect {
    fn describe<'a>(&'a self, visitor: &mut dyn FieldVisitor<'a>) {
        match self {
            Effect::Damage(DamageEffect {
                target,
                attacker,
                amount,
            }) => {
                visitor.visit("target", FieldValue::Str(target));
                visitor.visit("attacker", optional(attacker));
                visitor.visit("amount", FieldValue::Amount(amount));
            }
            Effect::Healing(HealingEffect {
                target,
                healer,
                amount,
            }) => {
                visitor.visit("target", FieldValue::Str(target));
                visitor.visit("healer", optional(healer));
                visitor.visit("amount", FieldValue::Amount(amount));
            }
            Effect::Destruction(DestructionEffect { target }) => {
                visitor.visit("target", FieldValue::Str(target));
            }
            Effect::Modification(ModificationEffect { at, tile_type }) => {
                visitor.visit("at", FieldValue::Str(at));
                visitor.visit("tile_type", FieldValue::Ref(DefinitionRef::TileType(tile_type)));
            }
            Effect::Spawn(SpawnEffect { at, entity_type }) => {
                visitor.visit("at", FieldValue::Str(at));
                visitor.visit(
                    "entity_type",
                    FieldValue::Ref(DefinitionRef::EntityType(entity_type)),
                );
            }
            Effect::Movement(MovementEffect {
                entity,
                to,
                relative,
            }) => {
                visitor.visit("entity", FieldValue::Str(entity));
                visitor.visit("to", FieldValue::Str(to));
                visitor.visit("relative", FieldValue::Bool(*relative));
            }
            Effect::Projectile(ProjectileEffect { source, target }) => {
                visitor.visit("source", FieldValue::Str(source));
                visitor.visit("target", FieldValue::Str(target));
            }
            Effect::Group(GroupEffect {
                group,
                new_target,
                effects,
                parallel,
            }) => {
                visitor.visit("group", FieldValue::Str(group));
                visitor.visit("new_target", FieldValue::Str(new_target));
                visitor.visit("parallel", FieldValue::Bool(*parallel));
                visitor.visit("effects", FieldValue::Effects(effects));
            }
            Effect::AreaTarget(AreaTargetEffect {
                source,
                radius,
                new_group,
            }) => {
                visitor.visit("source", FieldValue::Str(source));
                visitor.visit("radius", FieldValue::Int(i64::from(*radius)));
                visitor.visit("new_group", FieldValue::Str(new_group));
            }
        }
    }
}

impl Describe for ContentBundle {
    fn describe<'a>(&'a self, visitor: &mut dyn FieldVisitor<'a>) {
        visitor.visit("size", FieldValue::Size(self.size));
        visitor.visit(
            "default_tile",
            FieldValue::Ref(DefinitionRef::TileType(&self.default_tile)),
        );
        visitor.visit(
            "tile_types",
            FieldValue::Refs(self.tile_types.iter().map(DefinitionRef::TileType).collect()),
        );
        visitor.visit(
            "entity_types",
            FieldValue::Refs(self.entity_types.iter().map(DefinitionRef::EntityType).collect()),
        );
        visitor.visit(
            "abilities",
            FieldValue::Refs(self.abilities.iter().map(DefinitionRef::Ability).collect()),
        );
    }
}
