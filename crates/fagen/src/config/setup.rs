//! First-run setup of a project config

use std::path::Path;

use thiserror::Error;
use tracing::info;

use super::{FontAwesomeVersion, ProjectConfig};
use crate::{fs::FileSystem, icon::Style};

/// Styles offered as the project default
pub const SETUP_STYLES: [Style; 4] = [Style::Regular, Style::Solid, Style::Light, Style::Duotone];

const TSCONFIG_FILE: &str = "tsconfig.json";
const QUASAR_CONFIG_FILES: [&str; 2] = ["quasar.conf.js", "quasar.config.js"];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("No {0} selected")]
    MissingSelection(&'static str),
}

/// What setup learns about the project from its files
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectProbe {
    pub has_tsconfig: bool,
    pub is_quasar: bool,
}

impl ProjectProbe {
    pub fn detect(fs: &impl FileSystem, project_dir: &Path) -> Self {
        let has_tsconfig = fs.path_exists(&project_dir.join(TSCONFIG_FILE));
        let is_quasar = QUASAR_CONFIG_FILES
            .iter()
            .any(|file| fs.path_exists(&project_dir.join(file)));

        if is_quasar {
            info!("Quasar Framework detected");
        }

        Self {
            has_tsconfig,
            is_quasar,
        }
    }
}

/// Port for the questions setup asks
///
/// `None` means the question was dismissed without an answer.
#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
pub trait SetupPrompter {
    fn select_version(&self) -> Option<FontAwesomeVersion>;

    fn select_default_style(&self) -> Option<Style>;

    fn confirm_typescript(&self) -> bool;
}

/// Ask the setup questions and build the initial config
///
/// TypeScript is only offered when the project has a `tsconfig.json`.
///
/// # Errors
///
/// Returns [`SetupError::MissingSelection`] when the version or default style question is
/// dismissed.
pub fn run_setup<P: SetupPrompter + ?Sized>(
    prompter: &P,
    probe: ProjectProbe,
) -> Result<ProjectConfig, SetupError> {
    let version = prompter
        .select_version()
        .ok_or(SetupError::MissingSelection("FontAwesome version"))?;
    let default_style = prompter
        .select_default_style()
        .ok_or(SetupError::MissingSelection("default style"))?;

    let mut config = ProjectConfig::initial(version, default_style);
    config.typescript = probe.has_tsconfig && prompter.confirm_typescript();
    config.is_quasar = probe.is_quasar;

    Ok(config)
}
