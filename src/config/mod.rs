//! Application configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const CONFIG_FILE: &str = "machinewatch.json";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Data directory path
    pub data_dir: PathBuf,

    /// Address the HTTP server binds to
    pub listen_addr: String,

    /// Logging filter applied when RUST_LOG is unset
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from the default data directory
    pub fn load() -> Result<Self> {
        Self::load_from(&default_data_dir()?)
    }

    /// Load configuration from a specific data directory, writing the
    /// defaults there on first run
    pub fn load_from(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(CONFIG_FILE);

        if config_path.exists() {
            info!("Loading config from {:?}", config_path);
            let json = fs::read_to_string(&config_path)
                .with_context(|| format!("failed to read {}", config_path.display()))?;
            let config = serde_json::from_str(&json)
                .with_context(|| format!("failed to parse {}", config_path.display()))?;
            Ok(config)
        } else {
            warn!("No config found, creating default at {:?}", config_path);
            let config = Self::default_with_dir(data_dir.to_path_buf());
            config.save()?;
            Ok(config)
        }
    }

    /// Create default configuration with a specific data directory
    pub fn default_with_dir(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            listen_addr: "127.0.0.1:8000".to_string(),
            log_level: "info".to_string(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;

        let config_path = self.data_dir.join(CONFIG_FILE);
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, json)?;
        info!("Saved config to {:?}", config_path);
        Ok(())
    }

    /// Path of the SQLite database inside the data directory
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("machinewatch.db")
    }
}

/// Default data directory, honoring the MACHINEWATCH_DATA_DIR override
pub fn default_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("MACHINEWATCH_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }

    dirs::data_dir()
        .map(|dir| dir.join("machinewatch"))
        .context("could not determine a data directory")
}
