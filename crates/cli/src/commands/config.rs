use fagen::config::ProjectConfig;
use tracing::info;

use crate::{tables::ValidationTableReporter, terminal_progress_reporter::TerminalProgressReporter};

pub(crate) fn handle_validate(config: &ProjectConfig, reporter: TerminalProgressReporter) -> i32 {
    info!("Validating configuration");

    let result = config.validate();
    let issues = result.issues();

    if issues.has_errors() {
        reporter.report_error("Validation failed.");

        ValidationTableReporter::new()
            .add_errors(issues.errors(), reporter)
            .add_warnings(issues.warnings(), reporter)
            .print();
        1
    } else if issues.has_warnings() {
        ValidationTableReporter::new()
            .add_warnings(issues.warnings(), reporter)
            .print();
        reporter.report_success("Config is valid, with warnings.");
        0
    } else {
        reporter.report_success("Config is valid.");
        0
    }
}

pub(crate) fn handle_show(config: &ProjectConfig, reporter: TerminalProgressReporter) -> i32 {
    match serde_json::to_string_pretty(config) {
        Ok(json) => {
            println!("{json}");
            0
        }
        Err(e) => {
            reporter.report_error(format!("Unable to serialize config: {e}"));
            1
        }
    }
}
