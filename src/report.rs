use prettytable::{Cell, Row, Table};

use crate::results::ValidationResult;

/// Render a run's findings as a human-readable table, one row per finding in
/// detection order. A passed run renders the header with a single "all
/// checks passed" row.
pub fn render(result: &ValidationResult) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Check"),
        Cell::new("Column"),
        Cell::new("Detail"),
    ]));

    if result.is_passed() {
        table.add_row(Row::new(vec![
            Cell::new("-"),
            Cell::new("-"),
            Cell::new(&format!(
                "All checks passed ({} rows)",
                result.total_rows()
            )),
        ]));
        return table.to_string();
    }

    for finding in result.findings() {
        table.add_row(Row::new(vec![
            Cell::new(finding.check_name()),
            Cell::new(finding.column().unwrap_or("-")),
            Cell::new(&finding.to_string()),
        ]));
    }

    table.to_string()
}
