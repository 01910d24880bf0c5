//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{HcmError, Result};
use crate::merge::{MergeOptions, SourcePatterns};
use crate::utils::global_config_file;

/// Output format for merged documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
}

/// Which files of each level are loaded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// File name glob patterns (empty = `config.yaml`).
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Merge behaviour settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Report keys defined twice within one level (default: true).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_collisions: Option<bool>,
}

/// Output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output format (default: json).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Source file selection.
    #[serde(default)]
    pub sources: SourcesConfig,
    /// Merge settings.
    #[serde(default)]
    pub merge: MergeConfig,
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config file path for the user's home directory.
    pub fn user_config_path() -> Option<PathBuf> {
        global_config_file()
    }

    /// Merge another config into this one (other takes precedence for set values).
    pub fn merge(&mut self, other: Config) {
        // Patterns - only override if not empty
        if !other.sources.patterns.is_empty() {
            self.sources.patterns = other.sources.patterns;
        }

        if other.merge.report_collisions.is_some() {
            self.merge.report_collisions = other.merge.report_collisions;
        }
        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
    }

    /// Whether same-level collisions are reported.
    pub fn report_collisions(&self) -> bool {
        self.merge.report_collisions.unwrap_or(true)
    }

    /// The effective output format.
    pub fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    /// Build merge engine options from these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a file pattern is not a valid glob.
    pub fn merge_options(&self) -> Result<MergeOptions> {
        let patterns = SourcePatterns::new(&self.sources.patterns).map_err(|err| {
            HcmError::InvalidPattern {
                pattern: self.sources.patterns.join(", "),
                message: err.to_string(),
            }
        })?;

        Ok(MergeOptions {
            patterns,
            report_collisions: self.report_collisions(),
        })
    }
}
