//! Shared text formatting utilities for consistent styling

use std::fmt::Display;

use console::style;

/// Icon identifiers: bold cyan when colors are enabled
pub(crate) fn format_icon<T: Display>(text: T, use_colors: bool) -> String {
    if use_colors {
        style(text).cyan().bold().to_string()
    } else {
        text.to_string()
    }
}

/// Alias names: magenta when colors are enabled
pub(crate) fn format_alias<T: Display>(text: T, use_colors: bool) -> String {
    if use_colors {
        style(text).magenta().to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn format_dim<T: Display>(text: T, use_colors: bool) -> String {
    if use_colors {
        style(text).dim().to_string()
    } else {
        text.to_string()
    }
}

/// `1 icon`, `2 icons`; `alias` pluralizes as `aliases`
pub(crate) fn plural(word: &str, count: usize) -> String {
    match (word, count) {
        (word, 1) => format!("{count} {word}"),
        ("alias", _) => format!("{count} aliases"),
        (word, _) => format!("{count} {word}s"),
    }
}
