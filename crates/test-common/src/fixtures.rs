//! On-disk project fixtures.

use std::{
    fs,
    path::{Path, PathBuf},
};

use fagen::config::ProjectConfig;
use tempfile::TempDir;

use crate::constants::{CONFIG_FILE, DEFINITIONS_FILE, SAMPLE_DEFINITIONS};

/// A throwaway project directory
///
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A project that already has `config` saved.
    ///
    #[must_use]
    pub fn with_config(config: &ProjectConfig) -> Self {
        let project = Self::new();
        write_config_file(project.path(), config);
        project
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.path().join(CONFIG_FILE)
    }

    /// Create an empty marker file such as `tsconfig.json`.
    ///
    pub fn touch(&self, name: &str) {
        fs::write(self.path().join(name), "").unwrap();
    }

    #[must_use]
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path().join(relative)).unwrap()
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

pub fn write_config_file(dir: &Path, config: &ProjectConfig) -> PathBuf {
    write_raw_config_file(dir, &serde_json::to_string_pretty(config).unwrap())
}

pub fn write_raw_config_file(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join(CONFIG_FILE);
    fs::write(&path, contents).unwrap();
    path
}

/// Write [`SAMPLE_DEFINITIONS`] into `dir`.
///
pub fn write_definitions_file(dir: &Path) -> PathBuf {
    let path = dir.join(DEFINITIONS_FILE);
    fs::write(&path, SAMPLE_DEFINITIONS).unwrap();
    path
}

#[must_use]
pub fn read_project_config(dir: &Path) -> ProjectConfig {
    let contents = fs::read_to_string(dir.join(CONFIG_FILE)).unwrap();
    serde_json::from_str(&contents).unwrap()
}
