use fagen::{config::ProjectConfig, fs::FileSystem, registry::IconRegistry};

use crate::{
    commands::Project,
    formatters::{format_alias, format_icon, plural},
    terminal_progress_reporter::TerminalProgressReporter,
};

pub(crate) fn handle_remove<F: FileSystem + Clone>(
    project: &Project<F>,
    mut config: ProjectConfig,
    subjects: &[String],
    aliases_only: bool,
    reporter: TerminalProgressReporter,
) -> i32 {
    let outcome = {
        let mut registry = IconRegistry::new(&mut config);
        if aliases_only {
            registry.remove_aliases(subjects)
        } else {
            registry.remove_icons(subjects)
        }
    };

    reporter.report_registry_warnings(&outcome.warnings);

    if !outcome.has_changes() {
        reporter.report_info("Nothing to remove");
        return 0;
    }

    let colors = reporter.use_colors();
    for id in &outcome.removed_icons {
        reporter.report_success(format!("Removed icon {}", format_icon(id, colors)));
    }
    for (alias, target) in &outcome.removed_aliases {
        reporter.report_success(format!(
            "Removed alias {} -> {}",
            format_alias(alias, colors),
            format_icon(target, colors)
        ));
    }
    reporter.report_info(format!(
        "{} and {} left",
        plural("icon", config.icons().len()),
        plural("alias", config.aliases().len())
    ));

    project.save_and_generate(&config, reporter)
}
