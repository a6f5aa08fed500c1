use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot find home directory")]
    HomeDirUnavailable,

    #[error("Config file not found at: {}. Please run 'dashlink init' to create config.", .0.display())]
    NotFound(PathBuf),

    #[error("Config file already exists at: {}. Please edit it directly.", .0.display())]
    AlreadyExists(PathBuf),

    #[error("Invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize config: {0}")]
    Serialize(serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
