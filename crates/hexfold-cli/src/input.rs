use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use hexfold_protocol::{wire, Document};

/// Report documents in `dir`, sorted by file name.
pub fn document_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory {}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Decode every report document in `dir`. Each document's `source` is set
/// to its file name unless the document already names one.
pub fn load_documents(dir: &Path) -> Result<Vec<Document>> {
    let paths = document_paths(dir)?;
    if paths.is_empty() {
        bail!("no report documents (*.json) in {}", dir.display());
    }

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = std::fs::read(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let mut document = wire::deserialize_document(&bytes)
            .with_context(|| format!("Failed to decode {}", path.display()))?;
        if document.source.is_empty() {
            if let Some(name) = path.file_name() {
                document.source = name.to_string_lossy().into_owned();
            }
        }
        tracing::debug!(source = %document.source, turn = %document.turn, "loaded document");
        documents.push(document);
    }
    tracing::info!(documents = documents.len(), dir = %dir.display(), "loaded documents");
    Ok(documents)
}
