//! Global configuration location (~/.config/bookmatch/config.toml)

use std::path::PathBuf;

use crate::error::{BookmatchError, Result};

const CONFIG_DIR: &str = "bookmatch";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "BOOKMATCH_CONFIG_DIR";

/// Path of the user-wide config file
///
/// `BOOKMATCH_CONFIG_DIR` overrides the platform config directory.
pub fn global_config_path() -> Result<PathBuf> {
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()
            .ok_or_else(|| {
                BookmatchError::Other("unable to determine config directory".to_string())
            })?
            .join(CONFIG_DIR)
    };

    Ok(config_dir.join(CONFIG_FILE))
}
