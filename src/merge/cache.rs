//! Caller-owned cache of parsed documents.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::document::ConfigDocument;

#[derive(Debug, Clone)]
struct CachedDocument {
    modified: SystemTime,
    document: ConfigDocument,
}

/// Parsed documents keyed by file path and modification time.
///
/// The cache is never held globally: callers create one, pass it to
/// [`merge_hierarchy_cached`](super::merge_hierarchy_cached) by mutable
/// reference and decide how long it lives. An entry is only reused while the
/// file's modification time is unchanged.
#[derive(Debug, Clone, Default)]
pub struct DocumentCache {
    entries: HashMap<PathBuf, CachedDocument>,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cached document for `path` if it was cached at `modified`.
    pub fn get(&self, path: &Path, modified: SystemTime) -> Option<&ConfigDocument> {
        self.entries
            .get(path)
            .filter(|entry| entry.modified == modified)
            .map(|entry| &entry.document)
    }

    /// Store a document, replacing any older entry for the same path.
    pub fn insert(&mut self, path: PathBuf, modified: SystemTime, document: ConfigDocument) {
        self.entries
            .insert(path, CachedDocument { modified, document });
    }

    /// Drop the entry for `path`.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        self.entries.remove(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
