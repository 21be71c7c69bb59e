use crate::error::{CatalogError, Result};
use crate::model::DEFAULT_APP_NAME;
use crate::store::DEFAULT_LIST_LIMIT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATABASE: &str = "db";

/// Configuration for the catalog, stored in `<home>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Name reported by `ping`
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Store directory, relative to the data home unless absolute
    #[serde(default = "default_database")]
    pub database: String,

    /// Cap used when listing without an explicit limit
    #[serde(default = "default_list_limit")]
    pub list_limit: usize,
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_list_limit() -> usize {
    DEFAULT_LIST_LIMIT
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            database: default_database(),
            list_limit: default_list_limit(),
        }
    }
}

impl CatalogConfig {
    pub const KEYS: &'static [&'static str] = &["app-name", "database", "list-limit"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|e| CatalogError::Config(format!("{}: {}", config_path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| CatalogError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)
            .map_err(|e| CatalogError::Config(format!("{}: {}", config_dir.display(), e)))?;

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)
            .map_err(|e| CatalogError::Config(format!("{}: {}", config_path.display(), e)))
    }

    /// Resolve the store directory against the data home.
    pub fn database_path(&self, home: &Path) -> PathBuf {
        let db = Path::new(&self.database);
        if db.is_absolute() {
            db.to_path_buf()
        } else {
            home.join(db)
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "app-name" => Some(self.app_name.clone()),
            "database" => Some(self.database.clone()),
            "list-limit" => Some(self.list_limit.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "app-name" => self.app_name = value.to_string(),
            "database" => {
                if value.trim().is_empty() {
                    return Err(CatalogError::InvalidInput(
                        "database cannot be empty".to_string(),
                    ));
                }
                self.database = value.to_string();
            }
            "list-limit" => {
                self.list_limit = value.parse().map_err(|_| {
                    CatalogError::InvalidInput(format!(
                        "list-limit must be a non-negative integer, got '{}'",
                        value
                    ))
                })?;
            }
            other => {
                return Err(CatalogError::InvalidInput(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
