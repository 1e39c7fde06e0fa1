//! Engine configuration for bookmatch
//!
//! Stored as TOML. Looked up from an explicit path, then `bookmatch.toml` in
//! the working directory, then the global config directory.

pub mod global;
pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{BookmatchError, Result};
use crate::text::Language;

pub use global::global_config_path;
pub use types::EngineConfig;

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "bookmatch.toml";

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| BookmatchError::io_operation("read config", path.display(), e))?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BookmatchError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.default_limit == 0 {
            crate::bail_invalid!("default_limit", "0 (must be at least 1)");
        }
        if self.default_limit > self.max_limit {
            crate::bail_invalid!(
                "default_limit",
                format!("{} (exceeds max_limit {})", self.default_limit, self.max_limit)
            );
        }
        if !(0.0..=1.0).contains(&self.min_score) {
            crate::bail_invalid!("min_score", format!("{} (expected 0.0 to 1.0)", self.min_score));
        }
        if self.stemming && self.language == Language::None {
            crate::bail_unsupported!("stemming language", self.language, "spanish, english");
        }
        Ok(())
    }

    /// Resolve the configuration for a run
    ///
    /// Returns the config together with the file it came from, or `None` when
    /// defaults were used.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, Option<PathBuf>)> {
        discover_in(explicit, cwd, global_config_path().ok())
    }
}

fn discover_in(
    explicit: Option<&Path>,
    cwd: &Path,
    global: Option<PathBuf>,
) -> Result<(EngineConfig, Option<PathBuf>)> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(BookmatchError::not_found("config file", path.display()));
        }
        return Ok((EngineConfig::load(path)?, Some(path.to_path_buf())));
    }

    let candidates = std::iter::once(cwd.join(LOCAL_CONFIG_FILE)).chain(global);
    for candidate in candidates {
        if candidate.is_file() {
            debug!(path = %candidate.display(), "config_found");
            let config = EngineConfig::load(&candidate)?;
            return Ok((config, Some(candidate)));
        }
    }

    Ok((EngineConfig::default(), None))
}
