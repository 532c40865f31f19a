use std::sync::Arc;

use super::{EntityId, Layers};

/// How an entity moves through the world, which decides the occupancy layers
/// it claims.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MovementDomain {
    /// Walks; blocked by ground-blocking tiles and other ground entities.
    #[default]
    Ground,
    /// Flies; blocked by air-blocking tiles and other flyers.
    Air,
    /// Incorporeal; never blocked and never blocks.
    Ghost,
}

impl MovementDomain {
    pub fn layers(self) -> Layers {
        match self {
            Self::Ground => Layers::GROUND,
            Self::Air => Layers::AIR,
            Self::Ghost => Layers::empty(),
        }
    }
}

/// Immutable entity descriptor shared by every instance of the type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityType {
    pub id: String,
    pub name: String,
    pub domain: MovementDomain,
    /// Agents take turns; inert entities (rocks, corpses, traps) never act.
    pub is_agent: bool,
    pub max_health: u32,
}

impl EntityType {
    pub const DEFAULT_MAX_HEALTH: u32 = 50;

    /// Creates an inert entity type whose display name equals its id.
    pub fn new(id: impl Into<String>, domain: MovementDomain) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            domain,
            is_agent: false,
            max_health: Self::DEFAULT_MAX_HEALTH,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn agent(mut self) -> Self {
        self.is_agent = true;
        self
    }

    pub fn with_max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }
}

/// Live entity instance.
///
/// The entity's position is owned by the board's reverse index, never by the
/// entity itself. Health is kept within `0..=max_health` by the only two
/// mutators below.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    id: EntityId,
    kind: Arc<EntityType>,
    health: u32,
}

impl Entity {
    /// Creates an entity at full health.
    pub fn new(id: EntityId, kind: Arc<EntityType>) -> Self {
        let health = kind.max_health;
        Self { id, kind, health }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> &Arc<EntityType> {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.kind.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.kind.max_health
    }

    pub fn is_agent(&self) -> bool {
        self.kind.is_agent
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn layers(&self) -> Layers {
        self.kind.domain.layers()
    }

    /// Removes up to `amount` health and returns how much was actually removed.
    pub(crate) fn take_damage(&mut self, amount: u32) -> u32 {
        let actual = amount.min(self.health);
        self.health -= actual;
        actual
    }

    /// Restores up to `amount` health without exceeding the maximum and
    /// returns how much was actually restored.
    pub(crate) fn restore_health(&mut self, amount: u32) -> u32 {
        let missing = self.max_health().saturating_sub(self.health);
        let actual = amount.min(missing);
        self.health += actual;
        actual
    }
}
