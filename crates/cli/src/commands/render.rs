use std::path::Path;

use fagen::{
    config::ProjectConfig, definition::DefinitionSet, fs::FileSystem, render::IconRenderer,
};
use tracing::info;

use crate::{
    commands::Project, formatters::format_icon,
    terminal_progress_reporter::TerminalProgressReporter,
};

/// Run the render hook for each icon and print what it returns.
///
/// Icons without a definition are reported and make the command fail, the others are
/// still printed.
pub(crate) fn handle_render<F: FileSystem + Clone>(
    project: &Project<F>,
    config: &ProjectConfig,
    definitions: &Path,
    icons: &[String],
    reporter: TerminalProgressReporter,
) -> i32 {
    let definitions = match project.resolve_path(definitions) {
        Ok(path) => path,
        Err(e) => {
            reporter.report_error(format!(
                "Unable to resolve {}: {e}",
                definitions.display()
            ));
            return 1;
        }
    };
    let set = match DefinitionSet::load(project.fs(), &definitions) {
        Ok(set) => set,
        Err(e) => {
            reporter.report_error(format!(
                "Unable to load definitions from {}: {e}",
                definitions.display()
            ));
            return 1;
        }
    };
    info!(count = set.len(), "loaded definitions");

    let aliases = config.effective_aliases();
    let renderer = IconRenderer::new(&set, &aliases, config.default_style());

    let mut exit_code = 0;
    for raw in icons {
        match renderer.render(raw) {
            Some(descriptor) => println!("{descriptor}"),
            None => {
                reporter.report_warning(format!(
                    "No definition for {} (resolved to {})",
                    raw,
                    format_icon(renderer.lookup(raw), reporter.use_colors())
                ));
                exit_code = 1;
            }
        }
    }

    exit_code
}
