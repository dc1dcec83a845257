use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tracing::{debug, info};

use super::{
    CONFIG_FILE_NAME, ProjectConfig,
    store::{ConfigLoadError, ConfigSaveError, ConfigStore},
};
use crate::fs::FileSystem;

/// Stores the project config as pretty-printed JSON in the project directory
///
/// Saving writes a sibling `.tmp` file first and renames it over the config, so an
/// interrupted save never leaves a truncated config behind.
#[derive(Debug, Clone)]
pub struct JsonConfigStore<F: FileSystem> {
    fs: F,
    project_dir: PathBuf,
}

impl<F: FileSystem> JsonConfigStore<F> {
    pub fn new(fs: F, project_dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            project_dir: project_dir.into(),
        }
    }

    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    fn temp_location(&self) -> PathBuf {
        self.project_dir.join(format!("{CONFIG_FILE_NAME}.tmp"))
    }
}

impl<F: FileSystem> ConfigStore for JsonConfigStore<F> {
    fn load(&self) -> Result<ProjectConfig, ConfigLoadError> {
        let path = self.location();
        if !self.fs.path_exists(&path) {
            return Err(ConfigLoadError::NotFound { searched: path });
        }

        let contents = self.fs.read_file(&path)?;
        let config = serde_json::from_str(&contents).map_err(|e| ConfigLoadError::Parse {
            path: path.clone(),
            source: Arc::new(e),
        })?;

        debug!(path = %path.display(), "loaded project config");
        Ok(config)
    }

    fn save(&self, config: &ProjectConfig) -> Result<(), ConfigSaveError> {
        let mut contents = serde_json::to_string_pretty(config)
            .map_err(|e| ConfigSaveError::Serialize(Arc::new(e)))?;
        contents.push('\n');

        let path = self.location();
        let temp = self.temp_location();
        self.fs.write_file(&temp, contents.as_bytes())?;
        self.fs.rename(&temp, &path)?;

        info!(path = %path.display(), "saved project config");
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.project_dir.join(CONFIG_FILE_NAME)
    }
}
