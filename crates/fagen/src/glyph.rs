//! Glyph definitions and the composite path format of the icon hook
//!
//! A definition arrives as `[width, height, ligatures, unicode, path]`, where `path` is a
//! single SVG path or, for duotone glyphs, a `[secondary, primary]` pair. The encoder
//! folds that into one string: annotated layers joined by `&&`, followed by
//! `|<ligatures> <width> <height>`.

pub mod data;
pub mod encoder;

pub use self::{
    data::{GlyphLayer, LayerRole, Ligature, PathData, RawGlyphData},
    encoder::{CompositeGlyph, encode},
};

/// Marks the start of a layer's style directive
pub const DIRECTIVE_SEPARATOR: &str = "@@";

/// Joins encoded layers
pub const LAYER_SEPARATOR: &str = "&&";
