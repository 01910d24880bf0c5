//! Merge engine.
//!
//! Walks a [`Chain`] root first, loads the configuration sources of every
//! level and folds them into one document with [`deep_merge`]. Problems with
//! individual files are collected as [`MergeError`]s instead of aborting:
//! the caller always gets the best document the readable levels allow.

mod batch;
mod cache;
mod deep;
mod sources;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::chain::{resolve_chain, Chain};
use crate::document::{parse_document, ConfigDocument};
use crate::error::{MergeError, MergeErrorKind, PathError};

pub use batch::{merge_targets, TargetMerge};
pub use cache::DocumentCache;
pub use deep::deep_merge;
pub use sources::{SourcePatterns, DEFAULT_FILE_NAME};

/// Options controlling how levels are loaded.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Which files of a level are configuration sources.
    pub patterns: SourcePatterns,
    /// Report top-level keys defined by more than one file of the same level.
    pub report_collisions: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            patterns: SourcePatterns::default(),
            report_collisions: true,
        }
    }
}

/// Outcome of merging a chain.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeResult {
    /// Merged document; an empty mapping if nothing contributed.
    pub document: ConfigDocument,
    /// Per-level failures, root to leaf.
    pub errors: Vec<MergeError>,
}

impl MergeResult {
    /// Whether every level loaded without error.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Merge every level of `chain`, root first.
pub fn merge_hierarchy(chain: &Chain, options: &MergeOptions) -> MergeResult {
    merge_levels(chain, options, None)
}

/// Same as [`merge_hierarchy`], reusing and filling `cache`.
pub fn merge_hierarchy_cached(
    chain: &Chain,
    options: &MergeOptions,
    cache: &mut DocumentCache,
) -> MergeResult {
    merge_levels(chain, options, Some(cache))
}

/// Resolve the chain from `base` to `target` and merge it with default
/// options.
///
/// # Errors
///
/// Returns a [`PathError`] if the chain cannot be resolved. Problems with
/// individual configuration files are reported in [`MergeResult::errors`].
pub fn merge_hierarchical_configs(base: &Path, target: &Path) -> Result<MergeResult, PathError> {
    merge_hierarchical_configs_with(base, target, &MergeOptions::default())
}

/// Resolve the chain from `base` to `target` and merge it.
///
/// # Errors
///
/// Returns a [`PathError`] if the chain cannot be resolved.
pub fn merge_hierarchical_configs_with(
    base: &Path,
    target: &Path,
    options: &MergeOptions,
) -> Result<MergeResult, PathError> {
    let chain = resolve_chain(base, target)?;
    Ok(merge_hierarchy(&chain, options))
}

fn merge_levels(
    chain: &Chain,
    options: &MergeOptions,
    mut cache: Option<&mut DocumentCache>,
) -> MergeResult {
    let mut document = ConfigDocument::empty();
    let mut errors = Vec::new();

    for (depth, dir) in chain.iter().enumerate() {
        let sources = match sources::level_sources(dir, &options.patterns) {
            Ok(sources) => sources,
            Err(err) => {
                record(&mut errors, MergeError::read(dir, &err));
                continue;
            }
        };
        debug!(depth, dir = %dir.display(), sources = sources.len(), "visiting level");

        let mut loaded = Vec::with_capacity(sources.len());
        for source in sources {
            match load_source(&source, cache.as_deref_mut()) {
                Ok(doc) => loaded.push((source, doc)),
                Err(err) => record(&mut errors, err),
            }
        }

        if options.report_collisions {
            for collision in find_collisions(depth, &loaded) {
                record(&mut errors, collision);
            }
        }

        for (_, doc) in loaded {
            document = deep_merge(document, doc);
        }
    }

    MergeResult { document, errors }
}

fn record(errors: &mut Vec<MergeError>, err: MergeError) {
    debug!(location = %err.location.display(), kind = %err.kind, "{}", err.message);
    errors.push(err);
}

fn load_source(path: &Path, cache: Option<&mut DocumentCache>) -> Result<ConfigDocument, MergeError> {
    let modified = fs::metadata(path).and_then(|meta| meta.modified()).ok();

    match (cache, modified) {
        (Some(cache), Some(modified)) => {
            if let Some(doc) = cache.get(path, modified) {
                trace!(path = %path.display(), "cache hit");
                return Ok(doc.clone());
            }
            let doc = read_document(path)?;
            cache.insert(path.to_path_buf(), modified, doc.clone());
            Ok(doc)
        }
        _ => read_document(path),
    }
}

fn read_document(path: &Path) -> Result<ConfigDocument, MergeError> {
    let bytes = fs::read(path).map_err(|err| MergeError::read(path, &err))?;
    let doc = parse_document(&bytes).map_err(|err| MergeError::parse(path, &err))?;
    debug!(path = %path.display(), kind = doc.kind(), "loaded source");

    // An empty file contributes nothing.
    if doc.is_null() {
        return Ok(ConfigDocument::empty());
    }
    Ok(doc)
}

/// Top-level keys defined by more than one source of the same level.
///
/// Each later definition is reported against the first file defining the key.
fn find_collisions(depth: usize, loaded: &[(PathBuf, ConfigDocument)]) -> Vec<MergeError> {
    let mut first_seen: BTreeMap<&str, &Path> = BTreeMap::new();
    let mut collisions = Vec::new();

    for (path, doc) in loaded {
        let Some(map) = doc.as_mapping() else {
            continue;
        };
        for key in map.keys() {
            match first_seen.get(key.as_str()) {
                Some(first) => collisions.push(MergeError::new(
                    path.clone(),
                    MergeErrorKind::Collision,
                    format!(
                        "key collision at depth {depth}: '{key}' is also defined in {}",
                        first.display()
                    ),
                )),
                None => {
                    first_seen.insert(key, path);
                }
            }
        }
    }

    collisions
}
