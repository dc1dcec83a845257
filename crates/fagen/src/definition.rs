//! Icon definitions and the default-prefix index built from them
//!
//! Definitions are grouped by style, mirroring the `library.definitions` object of the
//! rendering library: `{ "fas": { "home": [576, 512, [], "f015", "M..."] } }`.

pub mod index;
pub mod library;

use crate::{glyph::RawGlyphData, icon::Style};

pub use self::{
    index::{DefaultPrefixIndex, disambiguate},
    library::{DefinitionError, DefinitionSet},
};

/// Port for glyph definition lookup
///
/// Style groups are reported in a stable order; the default-prefix index relies on it when
/// recording candidates.
#[cfg_attr(any(test, feature = "with_mocks"), mockall::automock)]
pub trait DefinitionProvider {
    /// Styles with at least one definition, in group order
    ///
    fn styles(&self) -> Vec<Style>;

    /// Names of every icon defined for `style`
    ///
    fn icon_names(&self, style: Style) -> Vec<String>;

    /// Raw glyph data for `name` in `style`, if defined
    ///
    fn definition(&self, style: Style, name: &str) -> Option<RawGlyphData>;
}
