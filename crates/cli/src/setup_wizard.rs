//! Interactive answers for first-run setup

use dialoguer::{Confirm, Select, theme::SimpleTheme};
use fagen::{
    config::{FontAwesomeVersion, setup::{SETUP_STYLES, SetupPrompter}},
    icon::Style,
};
use tracing::debug;

/// Asks on the terminal for whatever was not given on the command line
///
/// With `interactive` off, unanswered questions count as dismissed.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TerminalPrompter {
    pub(crate) version: Option<FontAwesomeVersion>,
    pub(crate) style: Option<Style>,
    pub(crate) typescript: bool,
    pub(crate) interactive: bool,
}

impl TerminalPrompter {
    fn select<T: Copy>(&self, prompt: &str, choices: &[(T, &str)]) -> Option<T> {
        if !self.interactive {
            return None;
        }

        let labels: Vec<&str> = choices.iter().map(|(_, label)| *label).collect();
        match Select::with_theme(&SimpleTheme)
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact_opt()
        {
            Ok(selection) => selection.map(|index| choices[index].0),
            Err(e) => {
                debug!("prompt failed: {e}");
                None
            }
        }
    }
}

impl SetupPrompter for TerminalPrompter {
    fn select_version(&self) -> Option<FontAwesomeVersion> {
        self.version.or_else(|| {
            let choices: Vec<_> = FontAwesomeVersion::ALL
                .iter()
                .map(|version| (*version, version.label()))
                .collect();
            self.select("Which FontAwesome version?", &choices)
        })
    }

    fn select_default_style(&self) -> Option<Style> {
        self.style.or_else(|| {
            let choices: Vec<_> = SETUP_STYLES
                .iter()
                .map(|style| (*style, style.label()))
                .collect();
            self.select("Default Style?", &choices)
        })
    }

    fn confirm_typescript(&self) -> bool {
        if self.typescript || !self.interactive {
            return self.typescript;
        }

        Confirm::with_theme(&SimpleTheme)
            .with_prompt("Use TypeScript?")
            .default(true)
            .interact()
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_answer_without_prompting() {
        let prompter = TerminalPrompter {
            version: Some(FontAwesomeVersion::V5Pro),
            style: Some(Style::Duotone),
            typescript: true,
            interactive: false,
        };

        assert_eq!(prompter.select_version(), Some(FontAwesomeVersion::V5Pro));
        assert_eq!(prompter.select_default_style(), Some(Style::Duotone));
        assert!(prompter.confirm_typescript());
    }

    #[test]
    fn test_unattended_questions_are_dismissed() {
        let prompter = TerminalPrompter::default();

        assert_eq!(prompter.select_version(), None);
        assert_eq!(prompter.select_default_style(), None);
        assert!(!prompter.confirm_typescript());
    }
}
