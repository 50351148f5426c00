//! Runtime settings
//!
//! Settings come from, in increasing precedence:
//!
//! 1. Built-in defaults
//! 2. A YAML file: `--config`, else `$GHREPORT_CONFIG`, else
//!    `<config_dir>/ghreport/config.yaml` when it exists
//! 3. Environment: `GHREPORT_API_URL`, `GHREPORT_TIMEOUT_SECS`, `GHREPORT_STORE_DIR`
//! 4. Command line flags (applied by the commands themselves)
//!
//! ## Example
//!
//! ```yaml
//! api_url: https://github.example.com/api/v3
//! timeout_secs: 30
//! store_dir: /var/tmp/ghreport
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{self, Result};
use crate::render::DEFAULT_FILENAME;

/// Application directory name under the platform config and cache dirs
const APP_DIR: &str = "ghreport";

/// Config file name under `<config_dir>/ghreport`
pub const CONFIG_FILE: &str = "config.yaml";

/// Reports subdirectory under the cache dir
const REPORTS_DIR: &str = "reports";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const ENV_CONFIG: &str = "GHREPORT_CONFIG";
pub const ENV_API_URL: &str = "GHREPORT_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "GHREPORT_TIMEOUT_SECS";
pub const ENV_STORE_DIR: &str = "GHREPORT_STORE_DIR";

/// Resolved settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Base URL of the GitHub REST API
    pub api_url: String,
    pub user_agent: String,
    /// HTTP request timeout in seconds
    pub timeout_secs: u64,
    /// Directory holding stored session reports
    pub store_dir: PathBuf,
    /// Default export path
    pub output: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        let cache = dirs::cache_dir().unwrap_or_else(std::env::temp_dir);
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: format!("ghreport/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            store_dir: cache.join(APP_DIR).join(REPORTS_DIR),
            output: PathBuf::from(DEFAULT_FILENAME),
        }
    }
}

impl Settings {
    /// Load settings from the config file and process environment
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut settings = match config_path(explicit) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        settings.apply_env(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse a YAML config file; unset keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content = fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content)
            .map_err(|e| error::config_parse_failed(path.display().to_string(), e.to_string()))
    }

    fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            self.timeout_secs = secs.trim().parse().map_err(|_| {
                error::config_invalid(format!("{ENV_TIMEOUT_SECS} must be a whole number, got '{secs}'"))
            })?;
        }
        if let Some(dir) = lookup(ENV_STORE_DIR) {
            self.store_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    /// Override the API base URL from the command line
    pub fn with_api_url(mut self, api_url: Option<String>) -> Result<Self> {
        if let Some(url) = api_url {
            self.api_url = url;
            self.validate()?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_url.trim().is_empty() {
            return Err(error::config_invalid("api_url must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(error::config_invalid("timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}

/// Pick the config file: explicit path, then `$GHREPORT_CONFIG`, then the
/// per-user file if it exists
fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(ENV_CONFIG) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .filter(|path| path.is_file())
}
