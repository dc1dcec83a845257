use fagen::{config::ProjectConfig, icon::ImportSpec};

use crate::{
    formatters::{format_alias, format_dim, format_icon, plural},
    tables::ListTableReporter,
    terminal_progress_reporter::TerminalProgressReporter,
};

/// Print the registered icons with their imports, then the project's own aliases.
///
pub(crate) fn handle_list(config: &ProjectConfig, reporter: TerminalProgressReporter) -> i32 {
    let colors = reporter.use_colors();
    let style = config.default_style();

    let mut icons = ListTableReporter::new(vec!["Icon", "Import", "Package"]);
    for id in config.icons() {
        let spec = ImportSpec::for_icon(id, style);
        icons.add_row(vec![
            format_icon(id, colors),
            spec.local.clone(),
            format_dim(&spec.path, colors),
        ]);
    }

    if icons.is_empty() {
        reporter.report_info("No icons registered");
        reporter.report_suggestion("Run `fa-gen add <icon>`");
    } else {
        icons.print();
    }

    let mut aliases = ListTableReporter::new(vec!["Alias", "Target"]);
    for (alias, target) in config.aliases() {
        aliases.add_row(vec![format_alias(alias, colors), format_icon(target, colors)]);
    }
    if !aliases.is_empty() {
        aliases.print();
    }

    reporter.report_info(format!(
        "{} and {} ({} default)",
        plural("icon", config.icons().len()),
        plural("alias", config.aliases().len()),
        style
    ));

    0
}
