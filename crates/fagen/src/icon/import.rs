use std::fmt;

use super::{id::IconId, style::Style};

/// Where generated code imports an icon from, and under which names
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSpec {
    /// Module path, e.g. `@fortawesome/pro-solid-svg-icons/faHome`
    pub path: String,
    /// Symbol exported by the package, e.g. `faHome`
    pub symbol: String,
    /// Local binding, e.g. `fasHome`
    pub local: String,
}

impl ImportSpec {
    /// Derive the import for `id`. Unresolved ids are imported as `default_style`.
    ///
    #[must_use]
    pub fn for_icon(id: &IconId, default_style: Style) -> Self {
        let style = id.prefix().or(default_style);
        let symbol = camel_case(&format!("fa-{}", id.name()));
        let local = camel_case(&format!("{style}-{}", id.name()));
        let package = style.package();

        Self {
            path: format!("@fortawesome/{package}/{symbol}"),
            symbol,
            local,
        }
    }
}

impl fmt::Display for ImportSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.symbol == self.local {
            write!(f, "import {{{}}} from \"{}\"", self.symbol, self.path)
        } else {
            write!(
                f,
                "import {{{} as {}}} from \"{}\"",
                self.symbol, self.local, self.path
            )
        }
    }
}

/// `fa-arrow-up-1-9` → `faArrowUp19`
fn camel_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for (i, word) in text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        if i == 0 {
            out.push_str(&word.to_ascii_lowercase());
            continue;
        }

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
        }
    }

    out
}
