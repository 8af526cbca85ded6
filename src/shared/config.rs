use crate::shared::errors::{AppError, AppResult};
use std::path::PathBuf;

pub const DEFAULT_CNMTS_URL: &str =
    "https://raw.githubusercontent.com/blawar/titledb/master/cnmts.json";
pub const DEFAULT_NAMES_URL: &str =
    "https://raw.githubusercontent.com/blawar/titledb/master/US.en.json";
pub const DEFAULT_VERSIONS_URL: &str =
    "https://raw.githubusercontent.com/blawar/titledb/master/versions.json";

pub const ENV_CNMTS_URL: &str = "TITLEDB_CNMTS_URL";
pub const ENV_NAMES_URL: &str = "TITLEDB_NAMES_URL";
pub const ENV_VERSIONS_URL: &str = "TITLEDB_VERSIONS_URL";
pub const ENV_JSON_PATH: &str = "VERSIONS_JSON_PATH";
pub const ENV_DIR_PATH: &str = "VERSIONS_DIR_PATH";

/// Configuration for a single versions sync run
///
/// Defaults point at the public titledb mirror and write next to the
/// working directory. Every field can be overridden from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncConfig {
    // Sources
    /// Content metadata records (title id -> version -> content entries)
    pub cnmts_url: String,

    /// Localized title names (any key -> { id, name })
    pub names_url: String,

    /// Explicit version records, merged under the content metadata
    pub versions_url: String,

    // Outputs
    /// Aggregate file holding every base title
    pub json_path: PathBuf,

    /// Directory receiving one `<BASE_ID>.json` per base title
    pub dir_path: PathBuf,
}

impl SyncConfig {
    pub fn new() -> Self {
        Self {
            cnmts_url: DEFAULT_CNMTS_URL.to_string(),
            names_url: DEFAULT_NAMES_URL.to_string(),
            versions_url: DEFAULT_VERSIONS_URL.to_string(),
            json_path: PathBuf::from("versions.json"),
            dir_path: PathBuf::from("versions/"),
        }
    }

    /// Build from process environment variables, falling back to defaults
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::new();

        if let Some(url) = read(ENV_CNMTS_URL) {
            config.cnmts_url = url;
        }
        if let Some(url) = read(ENV_NAMES_URL) {
            config.names_url = url;
        }
        if let Some(url) = read(ENV_VERSIONS_URL) {
            config.versions_url = url;
        }
        if let Some(path) = read(ENV_JSON_PATH) {
            config.json_path = PathBuf::from(path);
        }
        if let Some(path) = read(ENV_DIR_PATH) {
            config.dir_path = PathBuf::from(path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that every source is an absolute http(s) URL
    pub fn validate(&self) -> AppResult<()> {
        for (name, url) in [
            ("cnmts", &self.cnmts_url),
            ("names", &self.names_url),
            ("versions", &self.versions_url),
        ] {
            let parsed = reqwest::Url::parse(url).map_err(|e| {
                AppError::ConfigError(format!("Invalid {} URL '{}': {}", name, url, e))
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(AppError::ConfigError(format!(
                    "Unsupported scheme for {} URL '{}'",
                    name, url
                )));
            }
        }
        Ok(())
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new()
    }
}
