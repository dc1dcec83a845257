use std::collections::HashMap;

use tracing::{debug, trace};

use super::DefinitionProvider;
use crate::icon::{Prefix, Style};

/// Bare icon name to the styles defining it, in group order
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefaultPrefixIndex {
    candidates: HashMap<String, Vec<Style>>,
}

impl DefaultPrefixIndex {
    /// Index every icon name of every style group of `provider`.
    ///
    /// A name defined in several styles gets one candidate per style.
    pub fn build<P: DefinitionProvider + ?Sized>(provider: &P) -> Self {
        let mut index = Self::default();

        for style in provider.styles() {
            for name in provider.icon_names(style) {
                index.record(name, style);
            }
        }

        debug!(names = index.candidates.len(), "built default-prefix index");
        index
    }

    fn record(&mut self, name: String, style: Style) {
        let styles = self.candidates.entry(name).or_default();
        if !styles.contains(&style) {
            styles.push(style);
        }
    }

    /// Styles defining `name`; empty when the name is unknown
    ///
    #[must_use]
    pub fn candidates(&self, name: &str) -> &[Style] {
        self.candidates.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// See [`disambiguate`].
    ///
    #[must_use]
    pub fn disambiguate(&self, name: &str, prefix: Prefix) -> Prefix {
        disambiguate(name, prefix, self)
    }
}

/// Pick the style for a sentinel-prefixed `name` when exactly one style defines it
///
/// Concrete prefixes, unknown names and names defined in several styles keep `prefix`, so
/// the caller's default style applies.
#[must_use]
pub fn disambiguate(name: &str, prefix: Prefix, index: &DefaultPrefixIndex) -> Prefix {
    if !prefix.is_unresolved() {
        return prefix;
    }

    match index.candidates(name) {
        [style] => {
            trace!(name, %style, "single style defines icon");
            Prefix::Style(*style)
        }
        [] => prefix,
        several => {
            debug!(
                name,
                candidates = several.len(),
                "icon defined in several styles, keeping default"
            );
            prefix
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        definition::{DefinitionSet, MockDefinitionProvider},
        glyph::RawGlyphData,
    };
    use pretty_assertions::assert_eq;

    fn glyph() -> RawGlyphData {
        RawGlyphData::single(512, 512, "M0")
    }

    fn sample_set() -> DefinitionSet {
        DefinitionSet::new()
            .with(Style::Solid, "home", glyph())
            .with(Style::Solid, "bell", glyph())
            .with(Style::Regular, "bell", glyph())
            .with(Style::Brands, "github", glyph())
    }

    #[test]
    fn test_candidates_follow_group_order() {
        let index = DefaultPrefixIndex::build(&sample_set());

        assert_eq!(index.candidates("bell"), &[Style::Solid, Style::Regular]);
        assert_eq!(index.candidates("home"), &[Style::Solid]);
        assert!(index.candidates("missing").is_empty());
        assert_eq!(index.len(), 3);
    }

    #[test]
    fn test_single_candidate_is_used() {
        let index = DefaultPrefixIndex::build(&sample_set());

        assert_eq!(
            index.disambiguate("github", Prefix::Unresolved),
            Prefix::Style(Style::Brands)
        );
    }

    #[test]
    fn test_several_candidates_keep_sentinel() {
        let index = DefaultPrefixIndex::build(&sample_set());

        assert_eq!(
            disambiguate("bell", Prefix::Unresolved, &index),
            Prefix::Unresolved
        );
    }

    #[test]
    fn test_unknown_name_keeps_sentinel() {
        let index = DefaultPrefixIndex::build(&sample_set());

        assert_eq!(
            disambiguate("nope", Prefix::Unresolved, &index),
            Prefix::Unresolved
        );
    }

    #[test]
    fn test_concrete_prefix_is_never_changed() {
        let index = DefaultPrefixIndex::build(&sample_set());

        assert_eq!(
            disambiguate("github", Prefix::Style(Style::Light), &index),
            Prefix::Style(Style::Light)
        );
    }

    #[test]
    fn test_repeated_name_in_one_style_is_recorded_once() {
        let mut provider = MockDefinitionProvider::new();
        provider
            .expect_styles()
            .returning(|| vec![Style::Duotone]);
        provider
            .expect_icon_names()
            .returning(|_| vec!["coffee".to_string(), "coffee".to_string()]);

        let index = DefaultPrefixIndex::build(&provider);

        assert_eq!(index.candidates("coffee"), &[Style::Duotone]);
        assert_eq!(
            index.disambiguate("coffee", Prefix::Unresolved),
            Prefix::Style(Style::Duotone)
        );
    }
}
