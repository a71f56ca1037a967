use crate::{CatalogEntry, InvertedIndex};
use anyhow::{Context, Result};
use std::fs::{create_dir_all, File};
use std::io::{Read, Write};
use std::path::Path;

pub fn save_snapshot(path: &Path, index: &InvertedIndex) -> Result<()> {
    if let Some(parent) = path.parent() {
        create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(index)?;
    let mut f = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

/// Read a snapshot from disk. Missing, unreadable, malformed and empty
/// snapshots all come back as `None`.
pub fn load_snapshot(path: &Path) -> Option<InvertedIndex> {
    let mut f = match File::open(path) {
        Ok(f) => f,
        Err(err) => {
            tracing::debug!(path = %path.display(), %err, "no index snapshot");
            return None;
        }
    };
    let mut buf = String::new();
    if let Err(err) = f.read_to_string(&mut buf) {
        tracing::warn!(path = %path.display(), %err, "unreadable index snapshot");
        return None;
    }
    match serde_json::from_str::<InvertedIndex>(&buf) {
        Ok(index) if !index.is_empty() => Some(index),
        Ok(_) => None,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "malformed index snapshot, rebuilding");
            None
        }
    }
}

/// Return the persisted index if there is one, otherwise build from the catalog
/// and persist the result.
///
/// A loaded snapshot is trusted as-is: it is not compared against the current
/// catalog, so songs added or edited since it was written stay invisible until
/// the snapshot is removed or rebuilt with `rebuild`.
pub fn load_or_build<F>(snapshot: &Path, scan: F) -> InvertedIndex
where
    F: FnOnce() -> Vec<CatalogEntry>,
{
    if let Some(index) = load_snapshot(snapshot) {
        tracing::info!(num_tokens = index.num_tokens(), "loaded index snapshot");
        return index;
    }
    rebuild(snapshot, &scan())
}

/// Build from the given entries and overwrite the snapshot. A failed write is
/// logged and the in-memory index is still returned.
pub fn rebuild(snapshot: &Path, entries: &[CatalogEntry]) -> InvertedIndex {
    let index = InvertedIndex::build(entries);
    tracing::info!(num_songs = entries.len(), num_tokens = index.num_tokens(), "built index");
    if let Err(err) = save_snapshot(snapshot, &index) {
        tracing::warn!(path = %snapshot.display(), error = %format!("{err:#}"), "could not save index snapshot");
    }
    index
}
