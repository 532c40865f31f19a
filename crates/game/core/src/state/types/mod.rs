pub mod common;
pub mod entities;
pub mod entity;
pub mod tile;

// Re-export common types
pub use common::{Coords, EntityId, Size};

// Re-export entity types
pub use entities::EntitiesState;
pub use entity::{Entity, EntityType, MovementDomain};

// Re-export tile types
pub use tile::{Layers, Tile, TileType};
