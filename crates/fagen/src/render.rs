//! The render hook handed to the rendering library
//!
//! For every icon the host application asks for, the hook resolves the raw identifier,
//! picks a style, and returns the encoded glyph together with the CSS class the rendering
//! library puts on the generated element.

use std::{cell::OnceCell, fmt};

use tracing::debug;

use crate::{
    definition::{DefaultPrefixIndex, DefinitionProvider},
    glyph::{CompositeGlyph, encode},
    icon::{AliasMap, IconId, IconResolver, Style},
};

/// Class carried by every inline SVG element the rendering library creates
pub const ICON_CSS_CLASS: &str = "svg-inline--fa";

/// What the render hook returns for an icon it can draw
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderDescriptor {
    pub css_class: &'static str,
    pub icon: CompositeGlyph,
}

impl fmt::Display for RenderDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.css_class, self.icon)
    }
}

/// Resolves and encodes icons against one set of definitions
///
/// The default-prefix index is built from the provider the first time a bare name needs
/// it and reused for the lifetime of the renderer.
pub struct IconRenderer<'a, P: DefinitionProvider + ?Sized> {
    provider: &'a P,
    resolver: IconResolver<'a>,
    index: OnceCell<DefaultPrefixIndex>,
}

impl<'a, P: DefinitionProvider + ?Sized> IconRenderer<'a, P> {
    pub fn new(provider: &'a P, aliases: &'a AliasMap, default_style: Style) -> Self {
        Self {
            provider,
            resolver: IconResolver::new(aliases, default_style),
            index: OnceCell::new(),
        }
    }

    pub fn index(&self) -> &DefaultPrefixIndex {
        self.index
            .get_or_init(|| DefaultPrefixIndex::build(self.provider))
    }

    /// Resolve `raw` to the concrete identifier the renderer would draw.
    ///
    #[must_use]
    pub fn lookup(&self, raw: &str) -> IconId {
        let id = self.resolver.resolve_partial(raw);
        let prefix = if id.is_resolved() {
            id.prefix()
        } else {
            self.index().disambiguate(id.name(), id.prefix())
        };

        id.with_prefix(prefix)
            .with_default(self.resolver.default_style())
    }

    /// Run the render hook for `raw`
    ///
    /// Returns `None` when no definition exists for the resolved identifier; the rendering
    /// library then falls back to its own lookup.
    #[must_use]
    pub fn render(&self, raw: &str) -> Option<RenderDescriptor> {
        let id = self.lookup(raw);
        let style = id.style()?;

        let Some(glyph) = self.provider.definition(style, id.name()) else {
            debug!(raw, id = %id, "no definition for icon");
            return None;
        };

        debug!(raw, id = %id, "rendering icon");
        Some(RenderDescriptor {
            css_class: ICON_CSS_CLASS,
            icon: encode(style, &glyph),
        })
    }
}

impl<P: DefinitionProvider + ?Sized> fmt::Debug for IconRenderer<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconRenderer")
            .field("resolver", &self.resolver)
            .field("index_built", &self.index.get().is_some())
            .finish_non_exhaustive()
    }
}
