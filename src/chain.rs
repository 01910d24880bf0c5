//! Resolution of the directory chain between a base and a target.

use std::path::{Path, PathBuf};
use std::slice;

use tracing::debug;

use crate::error::PathError;

/// Ordered directories from base (first) to target (last), inclusive.
///
/// Every element is an ancestor-or-self of the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain {
    levels: Vec<PathBuf>,
}

impl Chain {
    /// The base directory, if the chain is not empty.
    pub fn base(&self) -> Option<&Path> {
        self.levels.first().map(PathBuf::as_path)
    }

    /// The target directory, if the chain is not empty.
    pub fn target(&self) -> Option<&Path> {
        self.levels.last().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> &[PathBuf] {
        &self.levels
    }

    pub fn iter(&self) -> slice::Iter<'_, PathBuf> {
        self.levels.iter()
    }
}

/// Build a chain from already known levels, root first.
///
/// No validation is performed; the merge engine trusts whatever it is given.
impl From<Vec<PathBuf>> for Chain {
    fn from(levels: Vec<PathBuf>) -> Self {
        Self { levels }
    }
}

impl<'a> IntoIterator for &'a Chain {
    type Item = &'a PathBuf;
    type IntoIter = slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.levels.iter()
    }
}

/// Resolve the chain of directories from `base` down to `target`.
///
/// Both paths are canonicalized first, so relative paths, `..` segments and
/// symlinks are accepted. Ancestry is checked on whole path components:
/// `/srv/app` is not considered to contain `/srv/application`.
///
/// # Errors
///
/// Returns [`PathError::NotFound`] if either path is not an existing
/// directory, and [`PathError::NotADescendant`] if `target` is not `base`
/// or below it.
pub fn resolve_chain(base: &Path, target: &Path) -> Result<Chain, PathError> {
    let base = canonical_dir(base)?;
    let target = canonical_dir(target)?;

    let relative = target
        .strip_prefix(&base)
        .map_err(|_| PathError::NotADescendant {
            base: base.clone(),
            target: target.clone(),
        })?;

    let mut levels = Vec::with_capacity(relative.components().count() + 1);
    let mut current = base.clone();
    levels.push(current.clone());
    for component in relative.components() {
        current.push(component);
        levels.push(current.clone());
    }

    debug!(
        base = %base.display(),
        target = %target.display(),
        levels = levels.len(),
        "resolved chain"
    );

    Ok(Chain { levels })
}

fn canonical_dir(path: &Path) -> Result<PathBuf, PathError> {
    let not_found = || PathError::NotFound {
        path: path.to_path_buf(),
    };
    let canonical = path.canonicalize().map_err(|_| not_found())?;
    if !canonical.is_dir() {
        return Err(not_found());
    }
    Ok(canonical)
}
