use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::storage::{FileStore, StorageError};

/// Environment variable naming the settings file
pub const CONFIG_PATH_ENV: &str = "TRACKER_SELECT_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config.toml";
const ENV_PREFIX: &str = "TRACKER_SELECT";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Anti-forgery token sent with every delete
    #[serde(default)]
    pub csrf_token: String,

    #[serde(default)]
    pub storage_dir: Option<PathBuf>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_server_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Settings {
    pub fn new() -> Result<Self, config::ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load(Path::new(&path))
    }

    /// Read `path` if it exists, then let `TRACKER_SELECT_*` variables override it
    pub fn load(path: &Path) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        if path.exists() {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn storage_dir(&self) -> Result<PathBuf, StorageError> {
        match &self.storage_dir {
            Some(dir) => Ok(dir.clone()),
            None => FileStore::default_dir(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
