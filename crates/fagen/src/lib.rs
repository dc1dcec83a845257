//! fagen - Font Awesome icon identifier resolution
//!
//! The `fagen` library turns loose icon identifiers (`home`, `fas:home`, `fa-home`) into
//! canonical `prefix:name` references, manages the aliases a project defines for them, and
//! encodes glyph definitions into the composite string format consumed by the host
//! application's icon hook.
//!
//! # Architecture
//!
//! Like its command-line front end, the library keeps its domain logic free of I/O. File
//! access goes through the [`fs::FileSystem`] port, persisted project state through the
//! [`config::store::ConfigStore`] port, and glyph data through the
//! [`definition::DefinitionProvider`] port.
//!
//! # Main Components
//!
//! - [`icon`] - Identifier tokenizer, alias resolution and import mapping
//! - [`definition`] - Loaded icon definitions and the default-prefix index
//! - [`glyph`] - Duotone path encoding
//! - [`render`] - The render hook tying resolution and encoding together
//! - [`registry`] - Add/remove operations over the project's icons and aliases
//! - [`config`] - Project configuration, its JSON store and first-run setup
//! - [`generate`] - Generation of the icon module imported by the host app
//! - [`fs`] - File system abstractions
//! - [`validation`] - Validation types and utilities
//!
//! # Examples
//!
//! ```
//! use fagen::icon::{AliasMap, IconResolver, Style};
//!
//! let aliases = AliasMap::builtin();
//! let resolver = IconResolver::new(&aliases, Style::Solid);
//!
//! assert_eq!(resolver.resolve("fa-home").to_string(), "fas:home");
//! assert_eq!(resolver.resolve("far:user").to_string(), "far:user");
//! ```

pub mod config;
pub mod definition;
pub mod fs;
pub mod generate;
pub mod glyph;
pub mod icon;
pub mod registry;
pub mod render;
pub mod validation;
