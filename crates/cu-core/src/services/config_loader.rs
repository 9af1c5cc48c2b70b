use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Result, UpdaterError};
use crate::models::UpdaterConfig;
use crate::services::detector::UpdateDetector;

/// Environment variable naming an optional YAML config file.
pub const CONFIG_ENV: &str = "COMPOSE_UPDATER_CONFIG";

pub fn load(config_path: &Path) -> Result<UpdaterConfig> {
    if !config_path.exists() {
        return Err(UpdaterError::ConfigNotFound(config_path.to_path_buf()));
    }
    let contents = std::fs::read_to_string(config_path)?;
    let config: UpdaterConfig = serde_yaml::from_str(&contents)
        .map_err(|e| UpdaterError::InvalidConfig(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

/// Load the file named by `COMPOSE_UPDATER_CONFIG`, or built-in defaults when unset.
pub fn resolve() -> Result<UpdaterConfig> {
    resolve_from(std::env::var_os(CONFIG_ENV))
}

pub fn resolve_from(config_path: Option<OsString>) -> Result<UpdaterConfig> {
    match config_path.filter(|p| !p.is_empty()) {
        Some(path) => {
            let path = PathBuf::from(path);
            tracing::debug!(path = %path.display(), "loading config");
            load(&path)
        }
        None => Ok(UpdaterConfig::default()),
    }
}

fn validate(config: &UpdaterConfig) -> Result<()> {
    if config.descriptor_file.is_empty() {
        return Err(UpdaterError::InvalidConfig(
            "descriptor_file must not be empty".into(),
        ));
    }
    if !config.descriptor_dir.is_absolute() {
        return Err(UpdaterError::InvalidConfig(format!(
            "descriptor_dir must be an absolute path, got {}",
            config.descriptor_dir.display()
        )));
    }
    if config.compose_command.trim().is_empty() {
        return Err(UpdaterError::InvalidConfig(
            "compose_command must not be empty".into(),
        ));
    }
    UpdateDetector::new(config.update_markers.as_slice())?;
    Ok(())
}
