//! Content bundle writer.
//!
//! A bundle is written as a directory named after its id:
//!
//! ```text
//! <root>/<bundle>/<bundle>.ron
//! <root>/<bundle>/tile_types/<id>.ron
//! <root>/<bundle>/entity_types/<id>.ron
//! <root>/<bundle>/abilities/<id>.ron
//! ```
//!
//! Definitions are discovered breadth-first starting from the bundle itself,
//! so anything reachable through a reference is written exactly once.

mod document;
mod queue;

pub use document::{Document, DocumentBuilder};
pub use queue::SerializationQueue;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use ron::ser::PrettyConfig;
use tactics_core::{ContentBundle, DefinitionError, DefinitionKind, Describe, Identifiable};

use crate::loaders::LoadResult;

const EXTENSION: &str = "ron";

/// Writes content bundles below a root directory.
#[derive(Clone, Debug)]
pub struct ContentWriter {
    root: PathBuf,
}

impl ContentWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Builds every document of `bundle` without touching the filesystem.
    ///
    /// The bundle document comes first, followed by referenced definitions in
    /// discovery order.
    pub fn render(&self, bundle: &ContentBundle) -> Result<Vec<Document>, DefinitionError> {
        let bundle_id = bundle.id();
        if bundle_id.is_empty() {
            return Err(DefinitionError::MissingId {
                kind: DefinitionKind::Bundle,
            });
        }

        let mut queue = SerializationQueue::new();
        let mut builder = DocumentBuilder::identified(bundle_id);
        bundle.describe(&mut builder);
        let mut documents = vec![finish(
            bundle_id,
            DefinitionKind::Bundle,
            bundle_id,
            builder,
            &mut queue,
        )?];

        while let Some(definition) = queue.dequeue() {
            let mut builder = DocumentBuilder::identified(definition.id());
            definition.describe(&mut builder);
            documents.push(finish(
                bundle_id,
                definition.kind(),
                definition.id(),
                builder,
                &mut queue,
            )?);
        }

        Ok(documents)
    }

    /// Writes `bundle` and returns the paths written, in render order.
    ///
    /// Each file is written to a temporary sibling first and renamed into
    /// place. Validation runs before anything is written.
    pub fn write(&self, bundle: &ContentBundle) -> LoadResult<Vec<PathBuf>> {
        let documents = self
            .render(bundle)
            .with_context(|| format!("Failed to render bundle '{}'", bundle.id))?;

        let mut written = Vec::with_capacity(documents.len());
        for document in documents {
            let text = ron::ser::to_string_pretty(&document.value, PrettyConfig::default())
                .with_context(|| {
                    format!("Failed to serialize {} '{}'", document.kind, document.id)
                })?;

            let path = self.root.join(&document.path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory {}", parent.display()))?;
            }

            let temp_path = path.with_extension("ron.tmp");
            fs::write(&temp_path, text)
                .with_context(|| format!("Failed to write {}", temp_path.display()))?;
            fs::rename(&temp_path, &path)
                .with_context(|| format!("Failed to move {} into place", path.display()))?;

            tracing::debug!(
                target: "tactics::content",
                kind = %document.kind,
                id = %document.id,
                path = %path.display(),
                "wrote definition"
            );
            written.push(path);
        }

        tracing::info!(
            target: "tactics::content",
            bundle = %bundle.id,
            files = written.len(),
            "bundle written"
        );
        Ok(written)
    }
}

fn finish<'a>(
    bundle_id: &str,
    kind: DefinitionKind,
    id: &str,
    builder: DocumentBuilder<'a>,
    queue: &mut SerializationQueue<'a>,
) -> Result<Document, DefinitionError> {
    let (value, references) = builder.finish();
    for reference in references {
        queue.enqueue(reference)?;
    }

    Ok(Document {
        kind,
        id: id.to_owned(),
        path: document_path(bundle_id, kind, id),
        value,
    })
}

fn document_path(bundle_id: &str, kind: DefinitionKind, id: &str) -> PathBuf {
    let file = format!("{id}.{EXTENSION}");
    match kind.dir() {
        Some(dir) => Path::new(bundle_id).join(dir).join(file),
        None => Path::new(bundle_id).join(file),
    }
}

#[cfg(test)]
mod tests {
    use tactics_core::{Size, TileType};

    use super::*;

    #[test]
    fn definitions_land_in_kind_directories() {
        assert_eq!(
            document_path("arena", DefinitionKind::TileType, "wall"),
            PathBuf::from("arena/tile_types/wall.ron")
        );
        assert_eq!(
            document_path("arena", DefinitionKind::Bundle, "arena"),
            PathBuf::from("arena/arena.ron")
        );
    }

    #[test]
    fn bundle_without_id_is_rejected() {
        let bundle = ContentBundle::new("", Size::new(1, 1), TileType::new("floor"));
        assert_eq!(
            ContentWriter::new("out").render(&bundle),
            Err(DefinitionError::MissingId {
                kind: DefinitionKind::Bundle
            })
        );
    }
}
