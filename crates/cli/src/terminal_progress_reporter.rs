//! Terminal status lines
//!
//! Every command reports through [`TerminalProgressReporter`] so messages share the same
//! prefixes and colors. Prefixes fall back to plain text on terminals without Unicode.
//! Errors and warnings go to stderr, everything else to stdout.

use std::fmt::Display;

use console::{Emoji, style};
use fagen::registry::RegistryWarning;

static ERROR_EMOJI: Emoji<'_, '_> = Emoji("❌ ", "[E] ");
static INFO_EMOJI: Emoji<'_, '_> = Emoji("ℹ️ ", "[I] ");
static SUGGESTION_EMOJI: Emoji<'_, '_> = Emoji("✨ ", "[S] ");
static SUCCESS_EMOJI: Emoji<'_, '_> = Emoji("✅ ", "OK ");
static WARN_EMOJI: Emoji<'_, '_> = Emoji("⚠️ ", "[W] ");

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum MessageType {
    Error,
    Info,
    Success,
    Suggestion,
    Warning,
}

#[derive(Debug, Clone, Copy)]
pub struct TerminalProgressReporter {
    use_colors: bool,
}

impl TerminalProgressReporter {
    #[must_use]
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    #[must_use]
    pub(crate) fn use_colors(self) -> bool {
        self.use_colors
    }

    /// Prefix and color `message` for its type
    ///
    pub(crate) fn status_line(self, message_type: MessageType, message: impl Display) -> String {
        let prefix = match message_type {
            MessageType::Error => ERROR_EMOJI,
            MessageType::Info => INFO_EMOJI,
            MessageType::Success => SUCCESS_EMOJI,
            MessageType::Suggestion => SUGGESTION_EMOJI,
            MessageType::Warning => WARN_EMOJI,
        };

        let formatted_message = if self.use_colors {
            match message_type {
                MessageType::Error => style(message).for_stderr().red().bold().to_string(),
                MessageType::Info => style(message).blue().to_string(),
                MessageType::Success => style(message).green().to_string(),
                MessageType::Suggestion => {
                    return format!(
                        "{prefix}{}: {}",
                        style("Suggestion").yellow().bold(),
                        &message
                    );
                }
                MessageType::Warning => style(message).for_stderr().yellow().bold().to_string(),
            }
        } else if message_type == MessageType::Suggestion {
            format!("Suggestion: {message}")
        } else {
            message.to_string()
        };

        format!("{prefix}{formatted_message}")
    }

    pub(crate) fn format_error(self, message: impl Display) -> String {
        self.status_line(MessageType::Error, message)
    }

    pub(crate) fn format_warning(self, message: impl Display) -> String {
        self.status_line(MessageType::Warning, message)
    }

    pub(crate) fn report_info(self, message: impl Display) {
        println!("{}", self.status_line(MessageType::Info, message));
    }

    pub(crate) fn report_success(self, message: impl Display) {
        println!("{}", self.status_line(MessageType::Success, message));
    }

    pub(crate) fn report_suggestion(self, message: impl Display) {
        println!("{}", self.status_line(MessageType::Suggestion, message));
    }

    pub(crate) fn report_warning(self, message: impl Display) {
        eprintln!("{}", self.format_warning(message));
    }

    pub(crate) fn report_error(self, message: impl Display) {
        eprintln!("{}", self.format_error(message));
    }

    /// Report the non-fatal problems of a registry batch.
    ///
    pub(crate) fn report_registry_warnings(self, warnings: &[RegistryWarning]) {
        for warning in warnings {
            self.report_warning(warning);
        }
    }
}
