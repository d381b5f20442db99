//! Configuration for pathtrace
//!
//! Lookup order: an explicit `--config` path, then
//! `$PATHTRACE_CONFIG_DIR/config.toml`, then `<user config dir>/pathtrace/config.toml`.
//! A missing file yields the defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_invalid;
use crate::error::{PathtraceError, Result};

pub use types::{DisplayConfig, PathtraceConfig, ReplayConfig, MAX_PRECISION};

const CONFIG_DIR: &str = "pathtrace";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PATHTRACE_CONFIG_DIR";

impl PathtraceConfig {
    /// Default config file location, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            return Some(PathBuf::from(env_dir).join(CONFIG_FILE));
        }
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Resolve and load configuration.
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            PathtraceError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: PathtraceConfig = toml::from_str(&content)?;
        config.validate()?;

        tracing::debug!(path = %path.display(), "load_config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.display.precision > MAX_PRECISION {
            bail_invalid!("display.precision", self.display.precision);
        }
        if self.display.unreachable.trim().is_empty() {
            bail_invalid!("display.unreachable", "empty marker");
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| PathtraceError::Other(format!("failed to serialize config: {}", e)))
    }
}
