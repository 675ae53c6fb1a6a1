use crate::error::{GtfsGetError, Result};
use crate::utils::fs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed published by Renfe through the Spanish transport ministry.
pub const DEFAULT_FEED_URL: &str =
    "https://ssl.renfe.com/ftransit/Fichero_CER_FOMENTO/fomento_transit.zip";
pub const DEFAULT_TARGET_DIR: &str = "gtfs";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    pub feed_url: String,
    pub target_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            feed_url: DEFAULT_FEED_URL.to_string(),
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Config = serde_json::from_str(&content)?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::ensure_dir_exists(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }
}

fn get_gtfsget_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".gtfsget"))
        .ok_or(GtfsGetError::HomeDirectoryNotFound)
}

fn get_config_path() -> Result<PathBuf> {
    Ok(get_gtfsget_dir()?.join("config.json"))
}
