use std::{collections::HashMap, path::Path, sync::Arc};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, warn};

use super::DefinitionProvider;
use crate::{
    fs::{FileSystem, FileSystemError},
    glyph::RawGlyphData,
    icon::Style,
};

/// Errors that can occur while loading a definitions document
///
#[derive(Error, Debug, Clone)]
pub enum DefinitionError {
    #[error("Definitions document is not valid JSON: {0}")]
    Parse(#[source] Arc<serde_json::Error>),

    #[error("Definitions document must be an object keyed by style prefix")]
    NotAnObject,

    #[error("Definition group `{group}` must be an object keyed by icon name")]
    InvalidGroup { group: String },

    #[error("Malformed definition for `{group}:{icon}`")]
    InvalidGlyph {
        group: String,
        icon: String,
        #[source]
        source: Arc<serde_json::Error>,
    },

    #[error(transparent)]
    FileSystem(#[from] FileSystemError),
}

#[derive(Debug, Clone)]
struct Group {
    style: Style,
    names: Vec<String>,
    glyphs: HashMap<String, RawGlyphData>,
}

impl Group {
    fn new(style: Style) -> Self {
        Self {
            style,
            names: Vec::new(),
            glyphs: HashMap::new(),
        }
    }
}

/// In-memory definitions, grouped by style in insertion order
///
#[derive(Debug, Clone, Default)]
pub struct DefinitionSet {
    groups: Vec<Group>,
}

impl DefinitionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the definition of `name` in `style`.
    ///
    pub fn add(&mut self, style: Style, name: impl Into<String>, glyph: RawGlyphData) {
        let name = name.into();
        let group = match self.groups.iter().position(|g| g.style == style) {
            Some(position) => &mut self.groups[position],
            None => {
                self.groups.push(Group::new(style));
                let last = self.groups.len() - 1;
                &mut self.groups[last]
            }
        };

        if !group.glyphs.contains_key(&name) {
            group.names.push(name.clone());
        }
        group.glyphs.insert(name, glyph);
    }

    /// Builder-style [`add`](Self::add)
    ///
    #[must_use]
    pub fn with(mut self, style: Style, name: impl Into<String>, glyph: RawGlyphData) -> Self {
        self.add(style, name, glyph);
        self
    }

    /// Parse a definitions document
    ///
    /// Groups keyed by anything other than a known style prefix are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] if the document is not JSON, is not shaped as
    /// `{ prefix: { name: glyph } }`, or holds a glyph that is not a
    /// `[width, height, ligatures, unicode, path]` array.
    pub fn from_json_str(json: &str) -> Result<Self, DefinitionError> {
        let document: Value =
            serde_json::from_str(json).map_err(|e| DefinitionError::Parse(Arc::new(e)))?;
        let Value::Object(groups) = document else {
            return Err(DefinitionError::NotAnObject);
        };

        let mut set = Self::new();
        for (group, icons) in groups {
            let Some(style) = Style::from_tag(&group) else {
                warn!(group, "skipping definitions for unknown style prefix");
                continue;
            };
            let Value::Object(icons) = icons else {
                return Err(DefinitionError::InvalidGroup { group });
            };

            set.add_group(style, &group, icons)?;
        }

        debug!(
            groups = set.groups.len(),
            icons = set.len(),
            "loaded icon definitions"
        );
        Ok(set)
    }

    /// Read and parse the definitions document at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] if the file cannot be read or parsed.
    pub fn load(fs: &impl FileSystem, path: &Path) -> Result<Self, DefinitionError> {
        let path = fs.expand_path(path)?;
        let json = fs.read_file(&path)?;
        Self::from_json_str(&json)
    }

    fn add_group(
        &mut self,
        style: Style,
        group: &str,
        icons: Map<String, Value>,
    ) -> Result<(), DefinitionError> {
        for (icon, value) in icons {
            let glyph = serde_json::from_value::<RawGlyphData>(value).map_err(|e| {
                DefinitionError::InvalidGlyph {
                    group: group.to_string(),
                    icon: icon.clone(),
                    source: Arc::new(e),
                }
            })?;
            self.add(style, icon, glyph);
        }

        Ok(())
    }

    /// Total number of definitions across all groups
    ///
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.glyphs.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DefinitionProvider for DefinitionSet {
    fn styles(&self) -> Vec<Style> {
        self.groups.iter().map(|g| g.style).collect()
    }

    fn icon_names(&self, style: Style) -> Vec<String> {
        self.groups
            .iter()
            .find(|g| g.style == style)
            .map(|g| g.names.clone())
            .unwrap_or_default()
    }

    fn definition(&self, style: Style, name: &str) -> Option<RawGlyphData> {
        self.groups
            .iter()
            .find(|g| g.style == style)
            .and_then(|g| g.glyphs.get(name))
            .cloned()
    }
}
