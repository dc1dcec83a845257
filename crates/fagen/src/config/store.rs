//! Config store port and error types

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

use super::ProjectConfig;
use crate::fs::FileSystemError;

/// Port for loading and saving the project config
///
#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
pub trait ConfigStore {
    /// Read the project config
    ///
    /// # Errors
    ///
    /// Returns [`ConfigLoadError::NotFound`] if no config exists yet, or another
    /// [`ConfigLoadError`] if it cannot be read or parsed.
    fn load(&self) -> Result<ProjectConfig, ConfigLoadError>;

    /// Persist `config`, replacing the previous one
    ///
    /// # Errors
    ///
    /// Returns [`ConfigSaveError`] if the config cannot be serialized or written.
    fn save(&self, config: &ProjectConfig) -> Result<(), ConfigSaveError>;

    /// Where the config lives
    ///
    fn location(&self) -> PathBuf;
}

#[derive(Error, Debug, Clone)]
pub enum ConfigLoadError {
    #[error("No configuration file found at {}", searched.display())]
    NotFound { searched: PathBuf },

    #[error("Error parsing config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Arc<serde_json::Error>,
    },

    #[error(transparent)]
    FileSystem(#[from] FileSystemError),
}

#[derive(Error, Debug, Clone)]
pub enum ConfigSaveError {
    #[error("Unable to serialize config: {0}")]
    Serialize(#[source] Arc<serde_json::Error>),

    #[error(transparent)]
    FileSystem(#[from] FileSystemError),
}
