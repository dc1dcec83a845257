//! Icon identifiers and how loose user input becomes one
//!
//! Resolution is split in three steps, each usable on its own:
//!
//! 1. [`normalize`] tokenizes a raw string into an [`IconId`] (`fa-home` → `fa:home`).
//! 2. [`resolve_alias`] applies at most one alias indirection.
//! 3. [`IconId::with_default`] replaces the `fa` sentinel by a concrete [`Style`].
//!
//! [`IconResolver`] chains the three with the aliases and default style of a project.

pub mod alias;
pub mod id;
pub mod import;
pub mod resolver;
pub mod style;

pub use self::{
    alias::{AliasMap, resolve_alias},
    id::{IconId, normalize},
    import::ImportSpec,
    resolver::IconResolver,
    style::{Prefix, Style, UnknownStyle},
};
