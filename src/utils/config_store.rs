//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// File name of the main configuration
pub const CONFIG_FILE: &str = "booktrack.toml";

/// Get the application config directory
pub fn app_config_dir() -> Result<PathBuf> {
    let dirs = ProjectDirs::from("com", "booktrack", "booktrack-gui").ok_or_else(|| {
        Error::Invalid {
            message: "Could not find config directory".to_string(),
        }
    })?;
    Ok(dirs.config_dir().to_path_buf())
}

/// Load a TOML config file from the application config directory
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    load_config_from(&app_config_dir()?.join(filename))
}

/// Load a TOML config file, falling back to defaults when it does not exist
pub fn load_config_from<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(T::default());
    }

    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    tracing::info!("Configuration loaded from {}", path.display());
    Ok(config)
}
