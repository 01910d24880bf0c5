//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::types::Config;
use crate::error::{HcmError, Result};
use crate::utils::local_config_file;

/// Load configuration from the specified path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|source| HcmError::IoWithContext {
        operation: "read config file".to_string(),
        path: path.to_path_buf(),
        source,
    })?;

    let config: Config = toml::from_str(&content).map_err(|err| HcmError::InvalidConfig {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    debug!(path = %path.display(), "loaded tool config");
    Ok(config)
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `~/.config/hcm/config.toml` (user-level, lowest priority)
/// 2. `.hcmrc.toml` in the base directory
/// 3. CLI argument `--config <path>` (highest priority)
///
/// Configs are merged with higher priority configs overriding lower priority ones.
/// Missing config files are handled gracefully (defaults are used).
///
/// # Arguments
///
/// * `cli_config_path` - Optional path to config file specified via CLI argument
/// * `base_dir` - The base directory of the merge
///
/// # Errors
///
/// Returns an error if a specified config file (via CLI) cannot be read or parsed.
/// Missing or broken default config files are not treated as errors.
pub fn load_config(cli_config_path: Option<&Path>, base_dir: &Path) -> Result<Config> {
    let mut config = Config::default();

    // Load user-level config (lowest priority)
    if let Some(user_config_path) = Config::user_config_path() {
        if user_config_path.exists() {
            match load_config_from_path(&user_config_path) {
                Ok(user_config) => config.merge(user_config),
                Err(e) => warn!(
                    "Failed to load user config at {}: {}",
                    user_config_path.display(),
                    e
                ),
            }
        }
    }

    // Load base-directory config (medium priority)
    if let Some(local_config_path) = local_config_file(base_dir) {
        match load_config_from_path(&local_config_path) {
            Ok(local_config) => config.merge(local_config),
            Err(e) => warn!(
                "Failed to load project config at {}: {}",
                local_config_path.display(),
                e
            ),
        }
    }

    // Load CLI-specified config (highest priority)
    if let Some(cli_path) = cli_config_path {
        config.merge(load_config_from_path(cli_path)?);
    }

    Ok(config)
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r#"# hcm Configuration File
# Place this file at ~/.config/hcm/config.toml for global settings
# or .hcmrc.toml in the base directory of a hierarchy

# Which files in each directory are merged
[sources]
# Glob patterns matched against file names.
# Several files in one directory are merged in file name order.
# Default: ["config.yaml"]
patterns = [
    # "*.yaml",
    # "*.yml",
]

# Merge settings
[merge]
# Warn when two files in the same directory define the same top-level key
report_collisions = true

# Output settings
[output]
# Output format: "json", "yaml"
format = "json"
"#
    .to_string()
}
