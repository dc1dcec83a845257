use std::collections::HashSet;

use super::ProjectConfig;
use crate::validation::{ValidationErrorCategory, ValidationIssue, ValidationIssues};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    pub(crate) issues: ValidationIssues,
}

impl ValidationResult {
    #[must_use]
    pub fn issues(&self) -> &ValidationIssues {
        &self.issues
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.issues.has_errors()
    }
}

impl ProjectConfig {
    /// Full validation of the project config
    ///
    #[must_use]
    pub fn validate(&self) -> ValidationResult {
        let mut issues = Vec::new();

        issues.extend(self.validate_default_style());
        issues.extend(self.validate_icons());
        issues.extend(self.validate_aliases());

        ValidationResult {
            issues: issues.into(),
        }
    }

    fn validate_default_style(&self) -> Option<ValidationIssue> {
        (!self.version.supports(self.default_style)).then(|| {
            ValidationIssue::error(
                ValidationErrorCategory::Availability,
                "default",
                &format!(
                    "The default style `{}` is not available in {}",
                    self.default_style,
                    self.version.label()
                ),
                Some("Pick another default style or switch to `svg-fontawesome-v6-pro`"),
            )
        })
    }

    fn validate_icons(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();

        for (position, id) in self.icons.iter().enumerate() {
            let field = format!("icons[{position}]");

            if !id.is_resolved() {
                issues.push(ValidationIssue::warning(
                    ValidationErrorCategory::IconFormat,
                    &field,
                    &format!("Icon `{id}` has no style and will use the default style"),
                    Some("Remove the icon and add it again to store a concrete style"),
                ));
            }

            if id.style().is_some_and(|style| !self.version.supports(style)) {
                issues.push(ValidationIssue::error(
                    ValidationErrorCategory::Availability,
                    &field,
                    &format!("Icon `{id}` uses a style not available in {}", self.version.label()),
                    None,
                ));
            }

            if !seen.insert(id) {
                issues.push(ValidationIssue::warning(
                    ValidationErrorCategory::InvalidValue,
                    &field,
                    &format!("Icon `{id}` is listed more than once"),
                    Some("Remove the duplicate entry"),
                ));
            }
        }

        issues
    }

    fn validate_aliases(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        for (alias, target) in &self.aliases {
            if alias.trim().is_empty() {
                issues.push(ValidationIssue::error(
                    ValidationErrorCategory::RequiredField,
                    "aliases",
                    "An alias has an empty name",
                    Some("Remove the alias or give it a name"),
                ));
                continue;
            }

            let concrete = target.clone().with_default(self.default_style);
            let registered = self
                .icons
                .iter()
                .any(|icon| icon.clone().with_default(self.default_style) == concrete);
            if !registered {
                issues.push(ValidationIssue::warning(
                    ValidationErrorCategory::Alias,
                    &format!("aliases.{alias}"),
                    &format!("Alias `{alias}` points to `{target}`, which is not registered"),
                    Some(&format!("Run `fa-gen add {concrete}`")),
                ));
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{FontAwesomeVersion, ProjectConfigBuilder},
        icon::Style,
        validation::ValidationLevel,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_clean_config_has_no_issues() {
        let config = ProjectConfigBuilder::default()
            .icon("fas:bars")
            .alias("menu", "fa:bars")
            .build();

        let result = config.validate();

        assert!(result.issues().is_empty());
        assert!(result.is_valid());
    }

    #[test]
    fn test_initial_config_is_clean() {
        let config = ProjectConfig::initial(FontAwesomeVersion::V6Pro, Style::Regular);

        assert!(config.validate().issues().is_empty());
    }

    #[test]
    fn test_unresolved_and_duplicate_icons_warn() {
        let config = ProjectConfigBuilder::default()
            .icon("home")
            .icon("fas:bell")
            .icon("fas-bell")
            .build();

        let result = config.validate();
        let fields: Vec<&str> = result.issues().iter().map(|i| i.field()).collect();

        assert!(result.is_valid());
        assert_eq!(fields, vec!["icons[0]", "icons[2]"]);
        assert_eq!(
            result.issues().iter().next().unwrap().category(),
            ValidationErrorCategory::IconFormat
        );
    }

    #[test]
    fn test_thin_style_on_v5_is_an_error() {
        let config = ProjectConfigBuilder::default()
            .version(FontAwesomeVersion::V5Pro)
            .default_style(Style::Thin)
            .icon("fat:bell")
            .build();

        let result = config.validate();

        assert!(!result.is_valid());
        assert_eq!(result.issues().errors().count(), 2);
        assert!(
            result
                .issues()
                .errors()
                .all(|i| i.category() == ValidationErrorCategory::Availability)
        );
    }

    #[test]
    fn test_alias_to_unregistered_icon_warns() {
        let config = ProjectConfigBuilder::default()
            .icon("fas:home")
            .alias("drink", "fad:coffee")
            .build();

        let issues = config.validate().issues().clone();
        let issue = issues.iter().next().unwrap();

        assert_eq!(issues.len(), 1);
        assert_eq!(issue.level(), ValidationLevel::Warning);
        assert_eq!(issue.field(), "aliases.drink");
        assert_eq!(issue.suggestion(), Some("Run `fa-gen add fad:coffee`"));
    }

    #[test]
    fn test_empty_alias_name_is_an_error() {
        let config = ProjectConfigBuilder::default()
            .icon("fas:home")
            .alias("", "fas:home")
            .build();

        assert!(!config.validate().is_valid());
    }
}
