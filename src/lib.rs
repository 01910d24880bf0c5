//! hcm - Hierarchical Config Merge
//!
//! Resolves the configuration that applies to a directory by deep-merging
//! the YAML files found on the way from a base directory down to it.
//!
//! # Features
//!
//! - **Layered**: deeper directories override values from their ancestors
//! - **Deep**: nested mappings are merged key by key, everything else is replaced
//! - **Forgiving**: a broken file is reported and skipped, never fatal
//! - **Deterministic**: the same tree always merges to the same document
//!
//! # Modules
//!
//! - [`chain`] - Directory chain resolution between base and target
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Tool configuration loading and types
//! - [`document`] - Configuration document model and YAML parsing
//! - [`error`] - Error types and result helpers
//! - [`merge`] - Deep merge and the merge engine
//! - [`output`] - Rendering merged documents
//! - [`utils`] - Path utilities
//!
//! # Example
//!
//! ```no_run
//! use hcm::merge_hierarchical_configs;
//! use std::path::Path;
//!
//! let result = merge_hierarchical_configs(Path::new("./org"), Path::new("./org/eu/de"))
//!     .expect("Failed to resolve chain");
//!
//! for error in &result.errors {
//!     eprintln!("Warning: {error}");
//! }
//! println!("{}", serde_json::to_string_pretty(&result.document).unwrap());
//! ```

/// Directory chain resolution.
pub mod chain;

/// CLI argument definitions.
pub mod cli;

/// Tool configuration for the hcm binary.
pub mod config;

/// Configuration document model.
pub mod document;

/// Error types and result helpers.
pub mod error;

/// Merge engine.
pub mod merge;

/// Output rendering.
pub mod output;

/// Path utilities.
pub mod utils;

// Re-export commonly used types
pub use chain::{resolve_chain, Chain};
pub use cli::Cli;
pub use config::Config;
pub use document::{parse_document, ConfigDocument, Mapping, Scalar};
pub use error::{HcmError, MergeError, MergeErrorKind, ParseError, PathError, Result};
pub use merge::{
    deep_merge, merge_hierarchical_configs, merge_hierarchical_configs_with, merge_hierarchy,
    merge_hierarchy_cached, merge_targets, DocumentCache, MergeOptions, MergeResult,
    SourcePatterns, TargetMerge,
};
