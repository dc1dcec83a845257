use fagen::{config::ProjectConfig, icon::normalize};

use crate::{
    formatters::{format_dim, format_icon},
    tables::ListTableReporter,
    terminal_progress_reporter::TerminalProgressReporter,
};

pub(crate) fn handle_resolve(
    config: &ProjectConfig,
    icons: &[String],
    reporter: TerminalProgressReporter,
) -> i32 {
    let colors = reporter.use_colors();
    let aliases = config.effective_aliases();
    let resolver = config.resolver(&aliases);

    let mut table = ListTableReporter::new(vec!["Input", "Normalized", "Resolved"]);
    for raw in icons {
        table.add_row(vec![
            raw.clone(),
            format_dim(normalize(raw), colors),
            format_icon(resolver.resolve(raw), colors),
        ]);
    }
    table.print();

    0
}
