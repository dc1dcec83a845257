use fagen::{
    config::ProjectConfig,
    fs::FileSystem,
    registry::{IconRegistry, RegistryOutcome},
};

use crate::{
    commands::Project,
    formatters::{format_alias, format_icon, plural},
    terminal_progress_reporter::TerminalProgressReporter,
};

pub(crate) fn handle_add<F: FileSystem + Clone>(
    project: &Project<F>,
    mut config: ProjectConfig,
    icons: &[String],
    reporter: TerminalProgressReporter,
) -> i32 {
    let outcome = IconRegistry::new(&mut config).add_icons(icons);
    finish(project, &config, &outcome, reporter)
}

/// `add --alias <name> <icon>`: exactly one icon is accepted.
///
pub(crate) fn handle_add_alias<F: FileSystem + Clone>(
    project: &Project<F>,
    mut config: ProjectConfig,
    alias: &str,
    icons: &[String],
    reporter: TerminalProgressReporter,
) -> i32 {
    let [icon] = icons else {
        reporter.report_error(format!(
            "An alias needs exactly one icon, got {}",
            plural("icon", icons.len())
        ));
        return 1;
    };

    if alias.trim().is_empty() {
        reporter.report_error("Alias names cannot be empty");
        return 1;
    }

    let outcome = IconRegistry::new(&mut config).add_alias(alias, icon);
    finish(project, &config, &outcome, reporter)
}

fn finish<F: FileSystem + Clone>(
    project: &Project<F>,
    config: &ProjectConfig,
    outcome: &RegistryOutcome,
    reporter: TerminalProgressReporter,
) -> i32 {
    reporter.report_registry_warnings(&outcome.warnings);

    if !outcome.has_changes() {
        reporter.report_info("Nothing to add");
        return 0;
    }

    let colors = reporter.use_colors();
    for id in &outcome.added_icons {
        reporter.report_success(format!("Added icon {}", format_icon(id, colors)));
    }
    for (alias, target) in &outcome.added_aliases {
        reporter.report_success(format!(
            "Added alias {} -> {}",
            format_alias(alias, colors),
            format_icon(target, colors)
        ));
    }

    project.save_and_generate(config, reporter)
}
