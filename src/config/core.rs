use directories::ProjectDirs;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{GameplayConfig, WorldGenConfig};
use crate::utils::error::{PreconditionError, Result};

const CONFIG_FILE_NAME: &str = "voxfield.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub worldgen: WorldGenConfig,
    #[serde(default)]
    pub gameplay: GameplayConfig,
}

impl EngineConfig {
    pub fn validate(&self) -> std::result::Result<(), PreconditionError> {
        self.worldgen.validate()
    }
}

/// Reads the config at `path`, writing the defaults there first if the file is missing.
pub fn load_or_create_config(path: &Path) -> Result<EngineConfig> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    if !path.exists() {
        let default_config = EngineConfig::default();
        let toml_content = toml::to_string_pretty(&default_config)?;
        std::fs::write(path, toml_content)?;
        info!("Wrote default config to {}", path.display());
        return Ok(default_config);
    }

    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Per-user config location, if the platform exposes one.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "MetroManDevTeam", "voxfield")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
