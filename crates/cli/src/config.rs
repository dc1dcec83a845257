use fagen::config::{ApplyToConfig, ProjectConfig};

use crate::cli::ClapCli;

impl ApplyToConfig for ClapCli {
    fn apply_to_config(&self, mut config: ProjectConfig) -> ProjectConfig {
        if let Some(style) = self.default_style {
            *config.default_style_mut() = style;
        }

        config
    }
}
