//! Path utilities.

use std::path::{Path, PathBuf};

/// File name of the tool config looked up in the base directory.
pub const LOCAL_CONFIG_FILE_NAME: &str = ".hcmrc.toml";

/// Get the config directory for hcm.
///
/// Returns `~/.config/hcm` on Unix-like systems.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("hcm"))
}

/// Get the global config file path.
///
/// Returns `~/.config/hcm/config.toml`.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find local config file in the base directory.
///
/// Looks for `.hcmrc.toml` in the given directory.
pub fn local_config_file(base_dir: &Path) -> Option<PathBuf> {
    let config_file = base_dir.join(LOCAL_CONFIG_FILE_NAME);
    if config_file.is_file() {
        Some(config_file)
    } else {
        None
    }
}
