//! Loaders that read content files into core types.

pub mod config;

pub use config::ConfigLoader;

use std::path::Path;

/// Common result type for loaders and writers.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
