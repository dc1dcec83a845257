//! Ready-made project configs.

use fagen::{
    config::{FontAwesomeVersion, ProjectConfig, ProjectConfigBuilder},
    icon::Style,
};

/// Solid default, two icons and one alias.
///
#[must_use]
pub fn test_config() -> ProjectConfig {
    test_config_with_style(Style::Solid)
}

#[must_use]
pub fn test_config_with_style(style: Style) -> ProjectConfig {
    ProjectConfigBuilder::default()
        .version(FontAwesomeVersion::V6Pro)
        .default_style(style)
        .icon(&format!("{}:home", style.tag()))
        .icon("far:bell")
        .alias("house", &format!("{}:home", style.tag()))
        .build()
}

#[must_use]
pub fn quasar_config() -> ProjectConfig {
    ProjectConfigBuilder::default()
        .quasar(true)
        .typescript(true)
        .icon("fas:home")
        .build()
}
