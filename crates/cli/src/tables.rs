use comfy_table::{
    ContentArrangement, Row, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL_CONDENSED,
};
use fagen::validation::ValidationIssue;

use crate::terminal_progress_reporter::TerminalProgressReporter;

fn styled_table(header: Vec<&'static str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

pub(crate) struct ValidationTableReporter {
    table: Table,
}

impl ValidationTableReporter {
    pub(crate) fn new() -> Self {
        Self {
            table: styled_table(vec!["Category", "Field", "Message", "Suggestion"]),
        }
    }

    pub(crate) fn add_errors<'a>(
        &mut self,
        issues: impl Iterator<Item = &'a ValidationIssue>,
        reporter: TerminalProgressReporter,
    ) -> &mut Self {
        for issue in issues {
            self.add_issue(reporter.format_error(issue.category()), issue);
        }

        self
    }

    pub(crate) fn add_warnings<'a>(
        &mut self,
        issues: impl Iterator<Item = &'a ValidationIssue>,
        reporter: TerminalProgressReporter,
    ) -> &mut Self {
        for issue in issues {
            self.add_issue(reporter.format_warning(issue.category()), issue);
        }

        self
    }

    fn add_issue(&mut self, category: String, issue: &ValidationIssue) {
        self.table.add_row(vec![
            category,
            issue.field().to_string(),
            issue.message().to_string(),
            issue.suggestion().unwrap_or_default().to_string(),
        ]);
    }

    pub(crate) fn print(&self) {
        eprintln!("{}", self.table);
    }
}

/// Generic listing table printed to stdout
///
pub(crate) struct ListTableReporter {
    table: Table,
}

impl ListTableReporter {
    pub(crate) fn new(header: Vec<&'static str>) -> Self {
        Self {
            table: styled_table(header),
        }
    }

    pub(crate) fn add_row<T: Into<Row>>(&mut self, row: T) -> &mut Self {
        self.table.add_row(row);
        self
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.table.row_count() == 0
    }

    pub(crate) fn print(&self) {
        println!("{}", self.table);
    }
}
