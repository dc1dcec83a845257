use fagen::{
    config::{setup::run_setup, store::ConfigStore},
    fs::FileSystem,
};
use tracing::info;

use crate::{
    commands::Project, setup_wizard::TerminalPrompter,
    terminal_progress_reporter::TerminalProgressReporter,
};

/// Create the project config, then generate the module for it.
///
/// An existing config is only replaced with `force`. A `--typescript` given on the command
/// line wins over the project probe.
pub(crate) fn handle_init<F: FileSystem + Clone>(
    project: &Project<F>,
    prompter: &TerminalPrompter,
    force: bool,
    reporter: TerminalProgressReporter,
) -> i32 {
    let location = project.store().location();
    if project.fs().path_exists(&location) && !force {
        reporter.report_error(format!("{} already exists", location.display()));
        reporter.report_suggestion("Pass `--force` to replace it");
        return 1;
    }

    let probe = project.probe();
    info!(?probe, "running setup");

    let mut config = match run_setup(prompter, probe) {
        Ok(config) => config,
        Err(e) => {
            reporter.report_error(e);
            reporter.report_suggestion(
                "Pass `--fa-version` and `--style` when not running in a terminal",
            );
            return 1;
        }
    };
    if prompter.typescript {
        *config.typescript_mut() = true;
    }

    if !project.save(&config, reporter) {
        return 1;
    }
    reporter.report_success(format!("Created {}", location.display()));

    project.generate(&config, reporter)
}
