//! Content definitions and the identity contract persistence relies on.
//!
//! A [`ContentBundle`] groups the tile types, entity types and abilities a
//! game is played with. Every named definition implements [`Identifiable`] and
//! [`Describe`], which is the whole surface a persistence layer may serialize.

mod bundle;
mod error;
mod schema;

pub use bundle::ContentBundle;
pub use error::DefinitionError;
pub use schema::{
    DefinitionKind, DefinitionRef, Describe, FieldValue, FieldVisitor, Identifiable,
};
