//! Utility module for hcm.
//!
//! Common path helpers shared by the binary and the config loader.

mod paths;

pub use paths::{config_dir, global_config_file, local_config_file, LOCAL_CONFIG_FILE_NAME};
