use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum UpdaterError {
    #[error("failed to enumerate running environments: {0}")]
    Enumeration(String),

    #[error("command execution failed: {0}")]
    Exec(String),

    #[error("config file not found at {0}")]
    ConfigNotFound(PathBuf),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, UpdaterError>;
