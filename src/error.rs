//! Custom error types for hcm.
//!
//! Uses thiserror for ergonomic error definitions.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Exit codes for hcm.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// Base or target directory is invalid.
    pub const PATH_ERROR: i32 = 2;
    /// At least one level failed to load and `--strict` was given.
    pub const LEVEL_ERRORS: i32 = 3;
    /// Invalid tool configuration.
    pub const INVALID_CONFIG: i32 = 5;
}

/// Fatal error raised while resolving the chain of directories.
///
/// There is no meaningful partial result without a valid chain, so these
/// abort the whole merge.
#[derive(Error, Debug)]
pub enum PathError {
    /// Base or target does not exist as a directory.
    #[error("Directory not found: '{path}'")]
    NotFound { path: PathBuf },

    /// Target is neither the base directory nor below it.
    #[error("Target path {target} is not within base directory {base}")]
    NotADescendant { base: PathBuf, target: PathBuf },
}

/// Failure to turn file content into a [`ConfigDocument`](crate::document::ConfigDocument).
#[derive(Error, Debug)]
pub enum ParseError {
    /// Malformed YAML.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A mapping key that cannot be represented as a string.
    #[error("unsupported mapping key: expected a scalar, got a {kind}")]
    UnsupportedKey { kind: &'static str },

    /// Two keys of one mapping have the same string form, e.g. `1` and `"1"`.
    #[error("duplicate mapping key '{key}'")]
    DuplicateKey { key: String },
}

/// What went wrong while loading one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeErrorKind {
    /// The file or directory could not be read.
    Read,
    /// The file content is not a valid document.
    Parse,
    /// Two files of the same level define the same top-level key.
    Collision,
}

impl fmt::Display for MergeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MergeErrorKind::Read => "read",
            MergeErrorKind::Parse => "parse",
            MergeErrorKind::Collision => "collision",
        };
        f.write_str(name)
    }
}

/// A recoverable, per-level failure collected during a merge.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("{}: {message}", location.display())]
pub struct MergeError {
    /// File or directory the failure belongs to.
    pub location: PathBuf,
    /// Failure category.
    pub kind: MergeErrorKind,
    /// Human readable description.
    pub message: String,
}

impl MergeError {
    pub fn new(
        location: impl Into<PathBuf>,
        kind: MergeErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn read(location: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::new(location, MergeErrorKind::Read, format!("failed to read: {err}"))
    }

    pub fn parse(location: impl Into<PathBuf>, err: &ParseError) -> Self {
        Self::new(location, MergeErrorKind::Parse, format!("failed to parse: {err}"))
    }
}

/// Main error type for the hcm binary.
#[derive(Error, Debug)]
pub enum HcmError {
    /// Chain resolution failed.
    #[error(transparent)]
    Path(#[from] PathError),

    /// Invalid tool configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },

    /// Invalid file name pattern.
    #[error("Invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Merged document could not be serialized.
    #[error("Failed to render output: {message}")]
    Render { message: String },

    /// Levels were skipped and the caller asked for a clean merge.
    #[error("{count} level error(s) reported in strict mode")]
    LevelErrors { count: usize },

    /// IO error with path context.
    #[error("Failed to {operation} '{path}': {source}")]
    IoWithContext {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HcmError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            HcmError::Path(_) => exit_code::PATH_ERROR,
            HcmError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
            HcmError::InvalidPattern { .. } => exit_code::INVALID_CONFIG,
            HcmError::Render { .. } => exit_code::GENERAL_ERROR,
            HcmError::LevelErrors { .. } => exit_code::LEVEL_ERRORS,
            HcmError::IoWithContext { .. } => exit_code::GENERAL_ERROR,
            HcmError::Io(_) => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias using HcmError.
pub type Result<T> = std::result::Result<T, HcmError>;
