use tracing::debug;

use super::{
    alias::{AliasMap, resolve_alias},
    id::{IconId, normalize},
    style::Style,
};

/// Resolves raw identifiers against one project's aliases and default style
///
/// The resolver only borrows its inputs; build one from the loaded project config where it
/// is needed instead of keeping resolution state around.
#[derive(Debug, Clone, Copy)]
pub struct IconResolver<'a> {
    aliases: &'a AliasMap,
    default_style: Style,
}

impl<'a> IconResolver<'a> {
    pub fn new(aliases: &'a AliasMap, default_style: Style) -> Self {
        Self {
            aliases,
            default_style,
        }
    }

    #[must_use]
    pub fn default_style(&self) -> Style {
        self.default_style
    }

    #[must_use]
    pub fn aliases(&self) -> &'a AliasMap {
        self.aliases
    }

    /// Normalize and apply aliases, leaving a sentinel prefix in place.
    ///
    #[must_use]
    pub fn resolve_partial(&self, raw: &str) -> IconId {
        resolve_alias(&normalize(raw), self.aliases)
    }

    /// Fully resolve `raw`; the result always carries a concrete style.
    ///
    #[must_use]
    pub fn resolve(&self, raw: &str) -> IconId {
        let resolved = self.resolve_partial(raw).with_default(self.default_style);
        debug!(raw, resolved = %resolved, "resolved icon identifier");
        resolved
    }
}
