use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_UPDATE_MARKERS: [&str; 2] = ["Pulled", "Downloaded newer image"];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpdaterConfig {
    /// Directory inside each environment holding the compose descriptor.
    /// Every compose command runs with this as its working directory.
    pub descriptor_dir: PathBuf,
    pub descriptor_file: String,
    pub compose_command: String,
    pub prune_command: String,
    /// Patterns whose presence in the pull output means new image content
    /// was fetched.
    pub update_markers: Vec<String>,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            descriptor_dir: PathBuf::from("/app"),
            descriptor_file: "docker-compose.yml".to_string(),
            compose_command: "docker compose".to_string(),
            prune_command: "docker system prune -f".to_string(),
            update_markers: DEFAULT_UPDATE_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}

impl UpdaterConfig {
    pub fn descriptor_path(&self) -> PathBuf {
        self.descriptor_dir.join(&self.descriptor_file)
    }

    pub fn pull_command(&self) -> String {
        format!("{} pull", self.compose_command)
    }

    pub fn down_command(&self) -> String {
        format!("{} down", self.compose_command)
    }

    pub fn up_command(&self) -> String {
        format!("{} up -d", self.compose_command)
    }
}
