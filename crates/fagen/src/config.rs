pub mod json;
pub mod setup;
pub mod store;
pub mod validate;

use std::{fmt, path::PathBuf, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::icon::{AliasMap, IconId, IconResolver, Style};

/// File name of the project config, looked up in the project directory
pub const CONFIG_FILE_NAME: &str = "fa.config.json";

/// Icons every new project starts with, resolved against the chosen default style
const DEFAULT_ICONS: &[&str] = &[
    "bars",
    "check-circle",
    "cog",
    "exclamation-circle",
    "exclamation-triangle",
    "info-circle",
    "pencil",
    "plus",
    "search",
    "times",
    "trash",
];

/// The Font Awesome Pro release whose packages the project imports from
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontAwesomeVersion {
    #[serde(rename = "svg-fontawesome-v5-pro")]
    V5Pro,
    #[serde(rename = "svg-fontawesome-v6-pro")]
    V6Pro,
}

impl FontAwesomeVersion {
    pub const ALL: [FontAwesomeVersion; 2] = [Self::V5Pro, Self::V6Pro];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::V5Pro => "svg-fontawesome-v5-pro",
            Self::V6Pro => "svg-fontawesome-v6-pro",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::V5Pro => "FontAwesome Pro 5",
            Self::V6Pro => "FontAwesome Pro 6",
        }
    }

    /// Whether this release ships `style`
    ///
    #[must_use]
    pub fn supports(self, style: Style) -> bool {
        !(self == Self::V5Pro && style == Style::Thin)
    }
}

impl fmt::Display for FontAwesomeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown Font Awesome version `{0}` (expected v5 or v6)")]
pub struct UnknownVersion(pub String);

impl FromStr for FontAwesomeVersion {
    type Err = UnknownVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "5" | "v5" | "svg-fontawesome-v5-pro" => Ok(Self::V5Pro),
            "6" | "v6" | "svg-fontawesome-v6-pro" => Ok(Self::V6Pro),
            _ => Err(UnknownVersion(s.to_string())),
        }
    }
}

/// Persisted state of one project: `fa.config.json`
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub(crate) version: FontAwesomeVersion,

    #[serde(rename = "default")]
    pub(crate) default_style: Style,

    #[serde(default)]
    pub(crate) typescript: bool,

    #[serde(default)]
    pub(crate) is_quasar: bool,

    #[serde(default)]
    pub(crate) icons: Vec<IconId>,

    /// User aliases; the built-in set is layered underneath at use time
    ///
    #[serde(default)]
    pub(crate) aliases: AliasMap,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) output: Option<PathBuf>,
}

impl ProjectConfig {
    /// A fresh config seeded with the default icons and the built-in aliases
    ///
    #[must_use]
    pub fn initial(version: FontAwesomeVersion, default_style: Style) -> Self {
        let icons = DEFAULT_ICONS
            .iter()
            .map(|name| IconId::new(default_style, *name))
            .collect();

        Self {
            version,
            default_style,
            typescript: false,
            is_quasar: false,
            icons,
            aliases: AliasMap::builtin(),
            output: None,
        }
    }

    #[must_use]
    pub fn version(&self) -> FontAwesomeVersion {
        self.version
    }

    #[must_use]
    pub fn default_style(&self) -> Style {
        self.default_style
    }

    #[must_use]
    pub fn typescript(&self) -> bool {
        self.typescript
    }

    #[must_use]
    pub fn is_quasar(&self) -> bool {
        self.is_quasar
    }

    #[must_use]
    pub fn icons(&self) -> &[IconId] {
        &self.icons
    }

    #[must_use]
    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    #[must_use]
    pub fn output(&self) -> Option<&PathBuf> {
        self.output.as_ref()
    }

    pub fn default_style_mut(&mut self) -> &mut Style {
        &mut self.default_style
    }

    pub fn typescript_mut(&mut self) -> &mut bool {
        &mut self.typescript
    }

    pub fn is_quasar_mut(&mut self) -> &mut bool {
        &mut self.is_quasar
    }

    pub fn output_mut(&mut self) -> &mut Option<PathBuf> {
        &mut self.output
    }

    /// User aliases over the built-in ones
    ///
    #[must_use]
    pub fn effective_aliases(&self) -> AliasMap {
        self.aliases.layered_over(&AliasMap::builtin())
    }

    /// A resolver over `aliases` using this project's default style
    ///
    /// Pass [`effective_aliases`](Self::effective_aliases) to resolve the way the host
    /// application does.
    #[must_use]
    pub fn resolver<'a>(&self, aliases: &'a AliasMap) -> IconResolver<'a> {
        IconResolver::new(aliases, self.default_style)
    }
}

/// Builder for [`ProjectConfig`], mostly for tests
///
#[derive(Debug, Default)]
pub struct ProjectConfigBuilder {
    version: Option<FontAwesomeVersion>,
    default_style: Option<Style>,
    typescript: bool,
    is_quasar: bool,
    icons: Vec<IconId>,
    aliases: AliasMap,
    output: Option<PathBuf>,
}

impl ProjectConfigBuilder {
    #[must_use]
    pub fn version(mut self, version: FontAwesomeVersion) -> Self {
        self.version = Some(version);
        self
    }

    #[must_use]
    pub fn default_style(mut self, style: Style) -> Self {
        self.default_style = Some(style);
        self
    }

    #[must_use]
    pub fn typescript(mut self, typescript: bool) -> Self {
        self.typescript = typescript;
        self
    }

    #[must_use]
    pub fn quasar(mut self, is_quasar: bool) -> Self {
        self.is_quasar = is_quasar;
        self
    }

    /// Add an icon exactly as given; no resolution happens here.
    ///
    #[must_use]
    pub fn icon(mut self, id: &str) -> Self {
        self.icons.push(IconId::from(id));
        self
    }

    #[must_use]
    pub fn alias(mut self, alias: &str, target: &str) -> Self {
        self.aliases.insert(alias, IconId::from(target));
        self
    }

    #[must_use]
    pub fn output<P: Into<PathBuf>>(mut self, output: P) -> Self {
        self.output = Some(output.into());
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectConfig {
        ProjectConfig {
            version: self.version.unwrap_or(FontAwesomeVersion::V6Pro),
            default_style: self.default_style.unwrap_or(Style::Solid),
            typescript: self.typescript,
            is_quasar: self.is_quasar,
            icons: self.icons,
            aliases: self.aliases,
            output: self.output,
        }
    }
}

/// Applies per-invocation settings (e.g. CLI flags) on top of the loaded config.
///
/// Overrides applied this way are never meant to be saved back.
pub trait ApplyToConfig {
    fn apply_to_config(&self, config: ProjectConfig) -> ProjectConfig;
}
