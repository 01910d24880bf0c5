//! Configuration module for hcm.
//!
//! Handles loading and merging the tool's own settings from multiple sources:
//! - CLI arguments (highest priority)
//! - `--config <path>`
//! - Base-directory `.hcmrc.toml`
//! - User-level `~/.config/hcm/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config};
pub use types::{Config, MergeConfig, OutputConfig, OutputFormat, SourcesConfig};
