//! Add and remove operations over a project's icons and aliases
//!
//! Every operation works through a batch of subjects. Problems with one subject are
//! reported as a [`RegistryWarning`] and the batch carries on; the returned
//! [`RegistryOutcome`] tells the caller whether anything changed and needs saving.

use thiserror::Error;
use tracing::{debug, warn};

use crate::{
    config::ProjectConfig,
    icon::{IconId, normalize},
};

/// A non-fatal problem with one subject of a batch
///
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryWarning {
    #[error("Icon `{id}` has not been added")]
    IconNotAdded { id: IconId },

    #[error("There are no aliases for icon `{id}`")]
    NoAliasesForIcon { id: IconId },

    #[error("Alias `{alias}` has not been added")]
    AliasNotAdded { alias: String },

    #[error("Icon `{id}` has already been added")]
    IconAlreadyAdded { id: IconId },
}

/// What a registry operation did
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryOutcome {
    pub added_icons: Vec<IconId>,
    pub removed_icons: Vec<IconId>,
    pub added_aliases: Vec<(String, IconId)>,
    pub removed_aliases: Vec<(String, IconId)>,
    pub warnings: Vec<RegistryWarning>,
}

impl RegistryOutcome {
    /// Whether the config was modified and should be saved
    ///
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !(self.added_icons.is_empty()
            && self.removed_icons.is_empty()
            && self.added_aliases.is_empty()
            && self.removed_aliases.is_empty())
    }

    fn warn(&mut self, warning: RegistryWarning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }
}

/// Mutating view over the icons and aliases of a [`ProjectConfig`]
///
#[derive(Debug)]
pub struct IconRegistry<'a> {
    config: &'a mut ProjectConfig,
}

impl<'a> IconRegistry<'a> {
    pub fn new(config: &'a mut ProjectConfig) -> Self {
        Self { config }
    }

    /// Fully resolve `subject` the way generated code will see it.
    ///
    fn resolve(&self, subject: &str) -> IconId {
        let aliases = self.config.effective_aliases();
        self.config.resolver(&aliases).resolve(subject)
    }

    fn is_registered(&self, id: &IconId) -> bool {
        self.config.icons.contains(id)
    }

    /// Register each subject after resolving it.
    ///
    pub fn add_icons<S: AsRef<str>>(&mut self, subjects: &[S]) -> RegistryOutcome {
        let mut outcome = RegistryOutcome::default();

        for subject in subjects {
            let id = self.resolve(subject.as_ref());
            if self.is_registered(&id) {
                outcome.warn(RegistryWarning::IconAlreadyAdded { id });
                continue;
            }

            debug!(subject = subject.as_ref(), id = %id, "adding icon");
            self.config.icons.push(id.clone());
            outcome.added_icons.push(id);
        }

        outcome
    }

    /// Point `alias` at `subject`, registering the target icon if needed.
    ///
    /// An existing alias with the same name is replaced.
    pub fn add_alias(&mut self, alias: &str, subject: &str) -> RegistryOutcome {
        let target = self.resolve(subject);
        let mut outcome = RegistryOutcome::default();

        if !self.is_registered(&target) {
            self.config.icons.push(target.clone());
            outcome.added_icons.push(target.clone());
        }

        let previous = self.config.aliases.insert(alias, target.clone());
        if previous.as_ref() != Some(&target) {
            debug!(alias, target = %target, ?previous, "alias set");
            outcome.added_aliases.push((alias.to_string(), target));
        }

        outcome
    }

    /// Unregister icons and drop every alias pointing at them
    ///
    /// A subject matches registered entries equal to its normalized form, to its form with
    /// the default style applied, or to the unresolved entry of the same name. Aliases are
    /// not applied to subjects.
    pub fn remove_icons<S: AsRef<str>>(&mut self, subjects: &[S]) -> RegistryOutcome {
        let mut outcome = RegistryOutcome::default();

        for subject in subjects {
            let normalized = normalize(subject.as_ref());
            let concrete = normalized.clone().with_default(self.config.default_style);
            let unresolved = IconId::unresolved(normalized.name());
            let matches =
                |item: &IconId| *item == concrete || *item == normalized || *item == unresolved;

            let (removed, kept) = std::mem::take(&mut self.config.icons)
                .into_iter()
                .partition::<Vec<_>, _>(|item| matches(item));
            self.config.icons = kept;

            if removed.is_empty() {
                outcome.warn(RegistryWarning::IconNotAdded {
                    id: concrete.clone(),
                });
            } else {
                outcome.removed_icons.extend(removed);
            }

            let removed_aliases = self.config.aliases.remove_targets(|t| matches(t));
            if removed_aliases.is_empty() {
                outcome.warn(RegistryWarning::NoAliasesForIcon { id: concrete });
            } else {
                outcome.removed_aliases.extend(removed_aliases);
            }
        }

        outcome
    }

    /// Remove aliases by name.
    ///
    pub fn remove_aliases<S: AsRef<str>>(&mut self, aliases: &[S]) -> RegistryOutcome {
        let mut outcome = RegistryOutcome::default();

        for alias in aliases {
            let alias = alias.as_ref();
            match self.config.aliases.remove(alias) {
                Some(target) => outcome.removed_aliases.push((alias.to_string(), target)),
                None => outcome.warn(RegistryWarning::AliasNotAdded {
                    alias: alias.to_string(),
                }),
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{
        config::ProjectConfigBuilder,
        icon::{AliasMap, Style},
    };
    use pretty_assertions::assert_eq;

    fn config() -> ProjectConfig {
        ProjectConfigBuilder::default()
            .default_style(Style::Solid)
            .icon("fas:home")
            .icon("far:bell")
            .alias("house", "fas:home")
            .build()
    }

    fn ids(raw: &[&str]) -> Vec<IconId> {
        raw.iter().map(|r| IconId::from(*r)).collect()
    }

    #[test]
    fn test_add_resolves_before_registering() {
        let mut config = config();
        let outcome = IconRegistry::new(&mut config).add_icons(&["user", "fad-coffee", "close"]);

        assert_eq!(
            outcome.added_icons,
            ids(&["fas:user", "fad:coffee", "fas:times"])
        );
        assert!(outcome.warnings.is_empty());
        assert_eq!(config.icons().len(), 5);
    }

    #[test]
    fn test_adding_a_registered_icon_warns() {
        let mut config = config();
        let outcome = IconRegistry::new(&mut config).add_icons(&["home", "fa-home"]);

        assert!(!outcome.has_changes());
        assert_eq!(
            outcome.warnings,
            vec![
                RegistryWarning::IconAlreadyAdded {
                    id: IconId::new(Style::Solid, "home")
                };
                2
            ]
        );
    }

    #[test]
    fn test_add_alias_registers_target() {
        let mut config = config();
        let outcome = IconRegistry::new(&mut config).add_alias("drink", "fad:coffee");

        assert_eq!(outcome.added_icons, ids(&["fad:coffee"]));
        assert_eq!(
            config.aliases().get("drink"),
            Some(&IconId::new(Style::Duotone, "coffee"))
        );
    }

    #[test]
    fn test_add_alias_replaces_existing_alias() {
        let mut config = config();
        let outcome = IconRegistry::new(&mut config).add_alias("house", "far:bell");

        assert!(outcome.added_icons.is_empty());
        assert_eq!(
            outcome.added_aliases,
            vec![("house".to_string(), IconId::new(Style::Regular, "bell"))]
        );
    }

    #[test]
    fn test_re_adding_same_alias_is_not_a_change() {
        let mut config = config();
        let outcome = IconRegistry::new(&mut config).add_alias("house", "home");

        assert!(!outcome.has_changes());
    }

    #[test]
    fn test_remove_icon_drops_its_aliases() {
        let mut config = config();
        let outcome = IconRegistry::new(&mut config).remove_icons(&["home"]);

        assert_eq!(outcome.removed_icons, ids(&["fas:home"]));
        assert_eq!(
            outcome.removed_aliases,
            vec![("house".to_string(), IconId::new(Style::Solid, "home"))]
        );
        assert!(outcome.warnings.is_empty());
        assert_eq!(config.icons(), ids(&["far:bell"]).as_slice());
        assert!(config.aliases().is_empty());
    }

    #[test]
    fn test_remove_matches_unresolved_entry() {
        let mut config = ProjectConfigBuilder::default().icon("bell").build();
        let outcome = IconRegistry::new(&mut config).remove_icons(&["fal:bell"]);

        assert_eq!(outcome.removed_icons, ids(&["fa:bell"]));
        assert!(config.icons().is_empty());
    }

    #[test]
    fn test_remove_unknown_icon_warns_twice() {
        let mut config = config();
        let outcome = IconRegistry::new(&mut config).remove_icons(&["fal:star"]);

        assert!(!outcome.has_changes());
        assert_eq!(
            outcome.warnings,
            vec![
                RegistryWarning::IconNotAdded {
                    id: IconId::new(Style::Light, "star")
                },
                RegistryWarning::NoAliasesForIcon {
                    id: IconId::new(Style::Light, "star")
                },
            ]
        );
    }

    #[test]
    fn test_remove_icon_without_aliases_still_removes() {
        let mut config = config();
        let outcome = IconRegistry::new(&mut config).remove_icons(&["far:bell"]);

        assert!(outcome.has_changes());
        assert_eq!(outcome.warnings.len(), 1);
        assert_eq!(outcome.warnings[0].to_string(), "There are no aliases for icon `far:bell`");
    }

    #[test]
    fn test_removing_missing_alias_leaves_map_unchanged() {
        let mut config = config();
        let before = config.aliases().clone();

        let outcome = IconRegistry::new(&mut config).remove_aliases(&["home"]);

        assert_eq!(
            outcome.warnings,
            vec![RegistryWarning::AliasNotAdded {
                alias: "home".to_string()
            }]
        );
        assert!(!outcome.has_changes());
        assert_eq!(config.aliases(), &before);
    }

    #[test]
    fn test_remove_alias() {
        let mut config = config();
        let outcome = IconRegistry::new(&mut config).remove_aliases(&["house"]);

        assert_eq!(outcome.removed_aliases.len(), 1);
        assert_eq!(config.aliases(), &AliasMap::new());
        assert_eq!(config.icons().len(), 2);
    }

    #[test]
    fn test_remove_then_add_round_trip() {
        let mut config = config();
        let before: HashSet<IconId> = config.icons().iter().cloned().collect();

        let removed = IconRegistry::new(&mut config).remove_icons(&["far:bell"]);
        let normalized: Vec<String> = removed
            .removed_icons
            .iter()
            .map(ToString::to_string)
            .collect();
        IconRegistry::new(&mut config).add_icons(&normalized);

        let after: HashSet<IconId> = config.icons().iter().cloned().collect();
        assert_eq!(before, after);
    }
}
