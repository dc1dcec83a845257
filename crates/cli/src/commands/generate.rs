use fagen::{config::ProjectConfig, fs::FileSystem};
use tracing::debug;

use crate::{commands::Project, terminal_progress_reporter::TerminalProgressReporter};

pub(crate) fn handle_generate<F: FileSystem + Clone>(
    project: &Project<F>,
    config: &ProjectConfig,
    reporter: TerminalProgressReporter,
) -> i32 {
    debug!(icons = config.icons().len(), "generating icon module");

    if config.icons().is_empty() {
        reporter.report_warning("No icons registered, the module will be empty");
    }

    project.generate(config, reporter)
}
