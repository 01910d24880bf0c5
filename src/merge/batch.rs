//! Merging many targets under one base.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use super::{merge_hierarchical_configs_with, MergeOptions, MergeResult};
use crate::error::PathError;

/// Result of merging one target of a batch.
#[derive(Debug)]
pub struct TargetMerge {
    /// Target directory as given by the caller.
    pub target: PathBuf,
    /// Merge outcome, or why the chain could not be resolved.
    pub result: Result<MergeResult, PathError>,
}

/// Merge every target under `base` in parallel.
///
/// Targets are independent units of work. Results are returned in the order
/// of `targets`, and a target whose chain fails does not affect the others.
pub fn merge_targets<P>(base: &Path, targets: &[P], options: &MergeOptions) -> Vec<TargetMerge>
where
    P: AsRef<Path> + Sync,
{
    targets
        .par_iter()
        .map(|target| {
            let target = target.as_ref();
            TargetMerge {
                target: target.to_path_buf(),
                result: merge_hierarchical_configs_with(base, target, options),
            }
        })
        .collect()
}
