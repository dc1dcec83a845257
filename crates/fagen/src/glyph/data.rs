use std::fmt;

use serde::{Deserialize, Serialize};

use super::DIRECTIVE_SEPARATOR;

/// A glyph ligature: a codepoint, or a ligature name in newer definition sets
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ligature {
    Codepoint(u32),
    Name(String),
}

impl fmt::Display for Ligature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codepoint(codepoint) => write!(f, "{codepoint}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

impl From<u32> for Ligature {
    fn from(codepoint: u32) -> Self {
        Self::Codepoint(codepoint)
    }
}

/// Which duotone layer a path draws
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerRole {
    /// Background layer, index 0
    Secondary,
    /// Foreground layer, index 1
    Primary,
}

impl LayerRole {
    #[must_use]
    pub fn for_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Secondary),
            1 => Some(Self::Primary),
            _ => None,
        }
    }

    /// Fill and opacity, overridable through the `--fa-*` CSS custom properties
    ///
    #[must_use]
    pub fn directive(self) -> &'static str {
        match self {
            Self::Secondary => {
                "fill: var(--fa-secondary-color, currentColor);opacity: 0.4;opacity: var(--fa-secondary-opacity, 0.4);"
            }
            Self::Primary => {
                "fill: var(--fa-primary-color, currentColor);opacity: 1;opacity: var(--fa-primary-opacity, 1);"
            }
        }
    }
}

/// One path of a layered glyph, either as defined or already carrying a style directive
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum GlyphLayer {
    Raw(String),
    Annotated { path: String, directive: String },
}

impl GlyphLayer {
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Raw(path) | Self::Annotated { path, .. } => path,
        }
    }

    #[must_use]
    pub fn is_annotated(&self) -> bool {
        matches!(self, Self::Annotated { .. })
    }

    /// Attach `role`'s directive; a layer that already has one is returned as is.
    ///
    #[must_use]
    pub fn annotate(self, role: LayerRole) -> Self {
        match self {
            Self::Raw(path) => Self::Annotated {
                path,
                directive: role.directive().to_string(),
            },
            annotated @ Self::Annotated { .. } => annotated,
        }
    }
}

impl From<String> for GlyphLayer {
    fn from(encoded: String) -> Self {
        match encoded.split_once(DIRECTIVE_SEPARATOR) {
            Some((path, directive)) => Self::Annotated {
                path: path.to_string(),
                directive: directive.to_string(),
            },
            None => Self::Raw(encoded),
        }
    }
}

impl From<&str> for GlyphLayer {
    fn from(encoded: &str) -> Self {
        Self::from(encoded.to_string())
    }
}

impl fmt::Display for GlyphLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(path) => f.write_str(path),
            Self::Annotated { path, directive } => {
                write!(f, "{path}{DIRECTIVE_SEPARATOR}{directive}")
            }
        }
    }
}

/// Path data of a definition
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum PathData {
    Single(String),
    Layered(Vec<GlyphLayer>),
}

/// A glyph as supplied by an icon definition
///
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "GlyphTuple")]
pub struct RawGlyphData {
    pub width: u32,
    pub height: u32,
    pub ligatures: Vec<Ligature>,
    /// Unicode code of the glyph; unused by the encoder
    pub unicode: String,
    pub path: PathData,
}

impl RawGlyphData {
    pub fn new(
        width: u32,
        height: u32,
        ligatures: impl IntoIterator<Item = Ligature>,
        path: PathData,
    ) -> Self {
        Self {
            width,
            height,
            ligatures: ligatures.into_iter().collect(),
            unicode: String::new(),
            path,
        }
    }

    /// Shorthand for a single-path glyph
    ///
    pub fn single(width: u32, height: u32, path: impl Into<String>) -> Self {
        Self::new(width, height, Vec::new(), PathData::Single(path.into()))
    }

    /// Shorthand for a `[secondary, primary]` duotone glyph
    ///
    pub fn layered<I, L>(width: u32, height: u32, ligatures: I, layers: L) -> Self
    where
        I: IntoIterator<Item = u32>,
        L: IntoIterator,
        L::Item: Into<GlyphLayer>,
    {
        Self::new(
            width,
            height,
            ligatures.into_iter().map(Ligature::Codepoint),
            PathData::Layered(layers.into_iter().map(Into::into).collect()),
        )
    }
}

#[derive(Deserialize)]
struct GlyphTuple(
    u32,
    u32,
    Vec<Ligature>,
    serde_json::Value,
    PathData,
);

impl From<GlyphTuple> for RawGlyphData {
    fn from(GlyphTuple(width, height, ligatures, unicode, path): GlyphTuple) -> Self {
        let unicode = match unicode {
            serde_json::Value::String(s) => s,
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        };

        Self {
            width,
            height,
            ligatures,
            unicode,
            path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_single_path_definition() {
        let glyph: RawGlyphData =
            serde_json::from_str(r#"[576, 512, [], "f015", "M575.8 255.5z"]"#).unwrap();

        assert_eq!(glyph.width, 576);
        assert_eq!(glyph.height, 512);
        assert!(glyph.ligatures.is_empty());
        assert_eq!(glyph.unicode, "f015");
        assert_eq!(glyph.path, PathData::Single("M575.8 255.5z".to_string()));
    }

    #[test]
    fn test_deserialize_duotone_definition() {
        let glyph: RawGlyphData =
            serde_json::from_str(r#"[512, 512, [61761, 61762], "f0f4", ["M1", "M2"]]"#).unwrap();

        assert_eq!(
            glyph.ligatures,
            vec![Ligature::Codepoint(61761), Ligature::Codepoint(61762)]
        );
        assert_eq!(
            glyph.path,
            PathData::Layered(vec![
                GlyphLayer::Raw("M1".to_string()),
                GlyphLayer::Raw("M2".to_string())
            ])
        );
    }

    #[test]
    fn test_deserialize_named_ligatures() {
        let glyph: RawGlyphData =
            serde_json::from_str(r#"[448, 512, ["house", 61461], "f015", "M0"]"#).unwrap();

        assert_eq!(
            glyph.ligatures,
            vec![Ligature::Name("house".to_string()), Ligature::Codepoint(61461)]
        );
    }

    #[test]
    fn test_layer_with_directive_parses_as_annotated() {
        let layer = GlyphLayer::from("M1@@fill: red;");

        assert_eq!(
            layer,
            GlyphLayer::Annotated {
                path: "M1".to_string(),
                directive: "fill: red;".to_string(),
            }
        );
        assert_eq!(layer.to_string(), "M1@@fill: red;");
    }

    #[test]
    fn test_annotate_is_idempotent() {
        let once = GlyphLayer::from("M1").annotate(LayerRole::Secondary);
        let twice = once.clone().annotate(LayerRole::Primary);

        assert!(once.is_annotated());
        assert_eq!(once, twice);
        assert_eq!(once.path(), "M1");
    }

    #[test]
    fn test_malformed_definition_is_rejected() {
        assert!(serde_json::from_str::<RawGlyphData>(r#"[512, "wide", [], "", "M0"]"#).is_err());
        assert!(serde_json::from_str::<RawGlyphData>(r#"[512, 512]"#).is_err());
    }
}
