use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tag of the `fa` sentinel prefix: "no style chosen yet".
///
pub const SENTINEL_TAG: &str = "fa";

/// A concrete Font Awesome icon style
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Style {
    #[serde(rename = "fas")]
    Solid,
    #[serde(rename = "far")]
    Regular,
    #[serde(rename = "fal")]
    Light,
    #[serde(rename = "fat")]
    Thin,
    #[serde(rename = "fad")]
    Duotone,
    #[serde(rename = "fab")]
    Brands,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Self::Solid,
        Self::Regular,
        Self::Light,
        Self::Thin,
        Self::Duotone,
        Self::Brands,
    ];

    /// The short prefix tag, e.g. `fas`
    ///
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Solid => "fas",
            Self::Regular => "far",
            Self::Light => "fal",
            Self::Thin => "fat",
            Self::Duotone => "fad",
            Self::Brands => "fab",
        }
    }

    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|style| style.tag() == tag)
    }

    /// Human readable name, as shown in the setup prompts
    ///
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Solid => "Solid",
            Self::Regular => "Regular",
            Self::Light => "Light",
            Self::Thin => "Thin",
            Self::Duotone => "Duotone",
            Self::Brands => "Brands",
        }
    }

    /// The npm package under `@fortawesome/` exporting this style's icons
    ///
    #[must_use]
    pub fn package(self) -> &'static str {
        match self {
            Self::Solid => "pro-solid-svg-icons",
            Self::Regular => "pro-regular-svg-icons",
            Self::Light => "pro-light-svg-icons",
            Self::Thin => "pro-thin-svg-icons",
            Self::Duotone => "pro-duotone-svg-icons",
            Self::Brands => "free-brands-svg-icons",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown icon style `{0}` (expected one of fas, far, fal, fat, fad, fab)")]
pub struct UnknownStyle(pub String);

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

/// The prefix part of an [`IconId`](super::IconId)
///
/// `Unresolved` is the `fa` sentinel: the identifier did not name a style and one still has
/// to be picked, either by disambiguation or from the project's default style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prefix {
    Unresolved,
    Style(Style),
}

impl Prefix {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Unresolved => SENTINEL_TAG,
            Self::Style(style) => style.tag(),
        }
    }

    /// Recognizes the sentinel and every [`Style`] tag
    ///
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        if tag == SENTINEL_TAG {
            Some(Self::Unresolved)
        } else {
            Style::from_tag(tag).map(Self::Style)
        }
    }

    #[must_use]
    pub fn is_unresolved(self) -> bool {
        matches!(self, Self::Unresolved)
    }

    #[must_use]
    pub fn style(self) -> Option<Style> {
        match self {
            Self::Unresolved => None,
            Self::Style(style) => Some(style),
        }
    }

    #[must_use]
    pub fn or(self, default: Style) -> Style {
        self.style().unwrap_or(default)
    }
}

impl From<Style> for Prefix {
    fn from(style: Style) -> Self {
        Self::Style(style)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
