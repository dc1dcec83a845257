use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::id::IconId;

/// Aliases every project starts with. User entries with the same key win.
///
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("add", "fa:plus"),
    ("close", "fa:times"),
    ("delete", "fa:trash"),
    ("edit", "fa:pencil"),
    ("error", "fa:exclamation-circle"),
    ("info", "fa:info-circle"),
    ("menu", "fa:bars"),
    ("search", "fa:search"),
    ("settings", "fa:cog"),
    ("success", "fa:check-circle"),
    ("warning", "fa:exclamation-triangle"),
];

/// Mapping from an alias (bare name or prefixed identifier) to an [`IconId`]
///
/// Kept sorted so the persisted config and generated code are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasMap(BTreeMap<String, IconId>);

impl AliasMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in alias set
    ///
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_ALIASES
            .iter()
            .map(|(alias, target)| (alias.to_string(), IconId::from(*target)))
            .collect()
    }

    /// These aliases layered over `base`: keys present in both resolve to `self`'s target.
    ///
    #[must_use]
    pub fn layered_over(&self, base: &AliasMap) -> AliasMap {
        let mut merged = base.clone();
        merged
            .0
            .extend(self.0.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    #[must_use]
    pub fn get(&self, alias: &str) -> Option<&IconId> {
        self.0.get(alias)
    }

    #[must_use]
    pub fn contains(&self, alias: &str) -> bool {
        self.0.contains_key(alias)
    }

    /// Insert or replace an alias, returning the previous target.
    ///
    pub fn insert(&mut self, alias: impl Into<String>, target: IconId) -> Option<IconId> {
        self.0.insert(alias.into(), target)
    }

    pub fn remove(&mut self, alias: &str) -> Option<IconId> {
        self.0.remove(alias)
    }

    /// Remove every alias whose target satisfies `predicate`, returning the removed pairs.
    ///
    pub fn remove_targets<P>(&mut self, mut predicate: P) -> Vec<(String, IconId)>
    where
        P: FnMut(&IconId) -> bool,
    {
        let keys: Vec<String> = self
            .0
            .iter()
            .filter(|(_, target)| predicate(target))
            .map(|(alias, _)| alias.clone())
            .collect();

        keys.into_iter()
            .filter_map(|alias| self.0.remove_entry(&alias))
            .collect()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, IconId> {
        self.0.iter()
    }

    pub fn targets(&self) -> impl Iterator<Item = &IconId> {
        self.0.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, IconId)> for AliasMap {
    fn from_iter<T: IntoIterator<Item = (String, IconId)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AliasMap {
    type Item = (&'a String, &'a IconId);
    type IntoIter = btree_map::Iter<'a, String, IconId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Apply at most one alias indirection to `id`
///
/// The bare name is tried first, then the full `prefix:name` form. Targets are never looked
/// up again, so alias chains and cycles cannot occur.
#[must_use]
pub fn resolve_alias(id: &IconId, aliases: &AliasMap) -> IconId {
    let target = aliases
        .get(id.name())
        .or_else(|| aliases.get(&id.to_string()));

    match target {
        Some(target) => {
            trace!(from = %id, to = %target, "alias applied");
            target.clone()
        }
        None => id.clone(),
    }
}
