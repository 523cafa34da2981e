//! Shared formatting utilities for the UI layer.

use chrono::NaiveDate;
use shared_types::TaskRecord;

/// Shown in place of a due date when a task has none.
pub const DATE_PLACEHOLDER: &str = "—";

/// Format a calendar day in the short numeric style, e.g. "3/9/2026".
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Due date for a task row.
///
/// Falls back to the raw text when the backend sends something we cannot
/// parse, and to [`DATE_PLACEHOLDER`] when there is no due date at all.
pub fn format_due_date(task: &TaskRecord) -> String {
    match (task.due_on(), task.due_date_raw()) {
        (Some(day), _) => format_short_date(day),
        (None, Some(raw)) => raw.to_string(),
        (None, None) => DATE_PLACEHOLDER.to_string(),
    }
}

/// Format a completion percentage, e.g. "100%".
pub fn format_progress(progress: i64) -> String {
    format!("{}%", progress)
}
