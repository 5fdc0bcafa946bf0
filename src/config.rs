// Runtime configuration.
// Defaults, overridden by LAUNCHPAD_* environment variables, overridden again by CLI flags.

use std::path::PathBuf;
use std::time::Duration;

use crate::cache::paths;
use crate::error::{Error, Result, StorageError};

pub const DEFAULT_API_URL: &str = "https://api.spacexdata.com/v5";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_API_URL: &str = "LAUNCHPAD_API_URL";
const ENV_CACHE_DIR: &str = "LAUNCHPAD_CACHE_DIR";
const ENV_TIMEOUT_SECS: &str = "LAUNCHPAD_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the SpaceX API, without trailing slash.
    pub api_base_url: String,
    /// Directory holding the launch cache. `None` if the platform has no cache dir.
    pub cache_dir: Option<PathBuf>,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            cache_dir: paths::cache_dir(),
            request_timeout: DEFAULT_TIMEOUT,
            user_agent: format!("launchpad/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration using `lookup` to resolve environment variables.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config = config.with_api_url(url)?;
        }

        if let Some(dir) = lookup(ENV_CACHE_DIR).filter(|dir| !dir.trim().is_empty()) {
            config.cache_dir = Some(PathBuf::from(dir));
        }

        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got {secs:?}"
                ))
            })?;
            if secs == 0 {
                return Err(Error::Config(format!(
                    "{ENV_TIMEOUT_SECS} must be greater than zero"
                )));
            }
            config.request_timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// Replace the API base URL. Only http(s) URLs are accepted.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Result<Self> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(Error::Config(format!(
                "API URL must be http(s), got {url:?}"
            )));
        }
        self.api_base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Path of the launch cache document.
    pub fn launches_path(&self) -> std::result::Result<PathBuf, StorageError> {
        self.cache_dir
            .as_deref()
            .map(paths::launches_path)
            .ok_or(StorageError::NoCacheDir)
    }
}
