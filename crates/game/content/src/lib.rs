//! File-backed persistence for tactics content.
//!
//! This crate sits outside the resolution core and only talks to it through
//! public surfaces:
//! - Engine configuration (data-driven via TOML)
//! - Content bundles written as a directory tree of RON documents, built from
//!   the core's [`Describe`](tactics_core::Describe) field schema
//!
//! Nothing here resolves effects or touches game state.

pub mod loaders;
pub mod writer;

pub use loaders::{ConfigLoader, LoadResult};
pub use writer::{ContentWriter, Document, DocumentBuilder, SerializationQueue};
