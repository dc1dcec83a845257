//! Canonical icon identifiers and the tokenizer producing them
//!
//! Users write identifiers in several shapes: `home`, `fas:home`, and the older
//! `fas-home`. The tokenizer reads a maximal run of lowercase letters at the start of the
//! input and only treats it as a prefix when it is a known tag *and* is directly followed
//! by `:` or `-`. Anything else is a bare name, so names such as `arrow-up` or `fan-x`
//! are never split.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::style::{Prefix, Style};

/// Separator between prefix and name as written by the user
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// `fas:home`
    Colon,
    /// `fas-home`, accepted for backwards compatibility
    Hyphen,
}

impl Separator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            ':' => Some(Self::Colon),
            '-' => Some(Self::Hyphen),
            _ => None,
        }
    }
}

/// Result of tokenizing a raw identifier
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tokens<'a> {
    pub prefix: Option<(Prefix, Separator)>,
    pub name: &'a str,
}

/// Split a raw identifier into an optional leading style tag and a name.
///
#[must_use]
pub fn tokenize(raw: &str) -> Tokens<'_> {
    let raw = raw.trim();
    let tag_len = raw
        .find(|c: char| !c.is_ascii_lowercase())
        .unwrap_or(raw.len());
    let (tag, rest) = raw.split_at(tag_len);

    let mut rest_chars = rest.chars();
    let separator = rest_chars.next().and_then(Separator::from_char);

    match (Prefix::from_tag(tag), separator) {
        (Some(prefix), Some(separator)) => Tokens {
            prefix: Some((prefix, separator)),
            name: rest_chars.as_str(),
        },
        _ => Tokens { prefix: None, name: raw },
    }
}

/// Canonical `prefix:name` reference to a glyph
///
/// Parsing never fails: every string normalizes to some identifier, and normalizing the
/// display form of an identifier gives the identifier back.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct IconId {
    prefix: Prefix,
    name: String,
}

impl IconId {
    pub fn new(prefix: impl Into<Prefix>, name: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
        }
    }

    /// An identifier still carrying the `fa` sentinel
    ///
    pub fn unresolved(name: impl Into<String>) -> Self {
        Self::new(Prefix::Unresolved, name)
    }

    #[must_use]
    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn style(&self) -> Option<Style> {
        self.prefix.style()
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.prefix.is_unresolved()
    }

    /// Replace the sentinel prefix by `default`; concrete prefixes are kept.
    ///
    #[must_use]
    pub fn with_default(self, default: Style) -> Self {
        Self {
            prefix: Prefix::Style(self.prefix.or(default)),
            name: self.name,
        }
    }

    #[must_use]
    pub fn with_prefix(self, prefix: impl Into<Prefix>) -> Self {
        Self {
            prefix: prefix.into(),
            name: self.name,
        }
    }
}

/// Normalize any raw identifier into its canonical form
///
/// Bare names receive the `fa` sentinel; the hyphen form is rewritten to the colon form.
#[must_use]
pub fn normalize(raw: &str) -> IconId {
    let tokens = tokenize(raw);
    let prefix = tokens
        .prefix
        .map_or(Prefix::Unresolved, |(prefix, _)| prefix);

    IconId::new(prefix, tokens.name)
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.name)
    }
}

impl FromStr for IconId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(normalize(s))
    }
}

impl From<&str> for IconId {
    fn from(raw: &str) -> Self {
        normalize(raw)
    }
}

impl From<String> for IconId {
    fn from(raw: String) -> Self {
        normalize(&raw)
    }
}

impl From<IconId> for String {
    fn from(id: IconId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod tokenize {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_bare_name() {
            assert_eq!(
                tokenize("home"),
                Tokens {
                    prefix: None,
                    name: "home"
                }
            );
        }

        #[test]
        fn test_colon_prefix() {
            assert_eq!(
                tokenize("fas:home"),
                Tokens {
                    prefix: Some((Prefix::Style(Style::Solid), Separator::Colon)),
                    name: "home"
                }
            );
        }

        #[test]
        fn test_hyphen_prefix() {
            assert_eq!(
                tokenize("fad-coffee"),
                Tokens {
                    prefix: Some((Prefix::Style(Style::Duotone), Separator::Hyphen)),
                    name: "coffee"
                }
            );
            assert_eq!(
                tokenize("fa-home"),
                Tokens {
                    prefix: Some((Prefix::Unresolved, Separator::Hyphen)),
                    name: "home"
                }
            );
        }

        #[test]
        fn test_hyphenated_name_is_not_split() {
            assert_eq!(tokenize("arrow-up").prefix, None);
            assert_eq!(tokenize("user-circle").name, "user-circle");
        }

        #[test]
        fn test_tag_like_start_of_longer_word() {
            // `fan` starts like `fa` but is not a tag
            assert_eq!(tokenize("fan-x").prefix, None);
            assert_eq!(tokenize("fax").prefix, None);
            assert_eq!(tokenize("facebook-f").name, "facebook-f");
        }

        #[test]
        fn test_only_the_leading_tag_is_consumed() {
            let tokens = tokenize("fa-fas-home");
            assert_eq!(
                tokens.prefix,
                Some((Prefix::Unresolved, Separator::Hyphen))
            );
            assert_eq!(tokens.name, "fas-home");
        }

        #[test]
        fn test_unknown_colon_prefix_stays_in_the_name() {
            assert_eq!(
                tokenize("foo:bar"),
                Tokens {
                    prefix: None,
                    name: "foo:bar"
                }
            );
        }

        #[test]
        fn test_surrounding_whitespace_is_ignored() {
            assert_eq!(tokenize("  far:user \n").name, "user");
        }

        #[test]
        fn test_uppercase_tag_is_not_recognized() {
            assert_eq!(tokenize("FAS:home").prefix, None);
        }
    }

    mod normalize {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_bare_gets_sentinel() {
            assert_eq!(normalize("home").to_string(), "fa:home");
        }

        #[test]
        fn test_hyphen_form_is_rewritten() {
            assert_eq!(normalize("fa-home").to_string(), "fa:home");
            assert_eq!(normalize("fal-bell").to_string(), "fal:bell");
        }

        #[test]
        fn test_canonical_is_kept() {
            assert_eq!(normalize("fab:github").to_string(), "fab:github");
        }

        #[test]
        fn test_idempotent() {
            let inputs = [
                "home",
                "fa-home",
                "fas:home",
                "fas-home",
                "fa-fas-home",
                "fan-x",
                "foo:bar",
                "fa:",
                "",
                "  fad:coffee ",
                "arrow-up-1-9",
                "fat:",
                "fa::x",
            ];

            for raw in inputs {
                let once = normalize(raw);
                let twice = normalize(&once.to_string());
                assert_eq!(once, twice, "normalizing `{raw}` twice changed it");
            }
        }
    }

    #[test]
    fn test_with_default_only_replaces_sentinel() {
        assert_eq!(
            normalize("home").with_default(Style::Light).to_string(),
            "fal:home"
        );
        assert_eq!(
            normalize("fad:home").with_default(Style::Light).to_string(),
            "fad:home"
        );
    }

    #[test]
    fn test_serde_uses_the_string_form() {
        let id: IconId = serde_json::from_str("\"fas-home\"").unwrap();
        assert_eq!(id, IconId::new(Style::Solid, "home"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"fas:home\"");
    }
}
