//! Common test utilities shared across all fagen crates.
//!
//! Fixtures for project directories, config files and definition documents, so the
//! library and CLI tests build their inputs the same way.

pub mod config;
pub mod constants;
pub mod fixtures;

pub use config::{quasar_config, test_config, test_config_with_style};
pub use constants::*;
pub use fixtures::{
    TestProject, read_project_config, write_config_file, write_definitions_file,
    write_raw_config_file,
};

pub use fagen::config::{ProjectConfig, ProjectConfigBuilder};
pub use tempfile::TempDir;
