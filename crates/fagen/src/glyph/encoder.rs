use std::fmt;

use tracing::trace;

use super::{
    LAYER_SEPARATOR,
    data::{GlyphLayer, LayerRole, Ligature, PathData, RawGlyphData},
};
use crate::icon::Style;

/// A glyph encoded for the icon hook of the rendering library
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeGlyph {
    path: String,
    ligatures: Vec<Ligature>,
    width: u32,
    height: u32,
}

impl CompositeGlyph {
    /// Joined, annotated path data
    ///
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn ligatures(&self) -> &[Ligature] {
        &self.ligatures
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for CompositeGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|", self.path)?;
        for ligature in &self.ligatures {
            write!(f, "{ligature} ")?;
        }
        write!(f, "{} {}", self.width, self.height)
    }
}

/// Encode `raw` as drawn in `style`
///
/// Only duotone glyphs with at least two ligatures keep them; every other glyph gets the
/// `0 0` placeholder pair. Layered paths have their first two layers annotated with the
/// secondary and primary directives and are joined with `&&`.
#[must_use]
pub fn encode(style: Style, raw: &RawGlyphData) -> CompositeGlyph {
    let ligatures = if style == Style::Duotone && raw.ligatures.len() >= 2 {
        raw.ligatures.clone()
    } else {
        vec![Ligature::Codepoint(0), Ligature::Codepoint(0)]
    };

    let path = match &raw.path {
        PathData::Single(path) => path.clone(),
        PathData::Layered(layers) => layers
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, layer)| annotate_layer(index, layer).to_string())
            .collect::<Vec<_>>()
            .join(LAYER_SEPARATOR),
    };

    trace!(%style, layers = path.matches(LAYER_SEPARATOR).count() + 1, "encoded glyph");

    CompositeGlyph {
        path,
        ligatures,
        width: raw.width,
        height: raw.height,
    }
}

fn annotate_layer(index: usize, layer: GlyphLayer) -> GlyphLayer {
    match LayerRole::for_index(index) {
        Some(role) => layer.annotate(role),
        None => layer,
    }
}
