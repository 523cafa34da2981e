use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::common::RecordId;

/// Lifecycle status of a task. Unrecognised values are kept verbatim in
/// `Other`; `null` or a missing status becomes an empty `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "String")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Other(String),
}

impl TaskStatus {
    fn known(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(TaskStatus::Pending),
            "IN_PROGRESS" => Some(TaskStatus::InProgress),
            "COMPLETED" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    /// Wire value, also used as the badge label.
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "PENDING",
            TaskStatus::InProgress => "IN_PROGRESS",
            TaskStatus::Completed => "COMPLETED",
            TaskStatus::Other(raw) => raw,
        }
    }
}

impl From<String> for TaskStatus {
    fn from(s: String) -> Self {
        TaskStatus::known(&s).unwrap_or(TaskStatus::Other(s))
    }
}

impl From<Option<String>> for TaskStatus {
    fn from(s: Option<String>) -> Self {
        s.map(TaskStatus::from).unwrap_or_default()
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Other(String::new())
    }
}

impl From<&str> for TaskStatus {
    fn from(s: &str) -> Self {
        TaskStatus::known(s).unwrap_or_else(|| TaskStatus::Other(s.to_string()))
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        match status {
            TaskStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

/// A unit of work as served by `GET /tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    /// Completion percentage, nominally 0 to 100.
    #[serde(default)]
    pub progress: i64,
    /// Raw due timestamp. `null` and a missing field both land as `None`.
    #[serde(default)]
    pub due_date: Option<String>,
}

impl TaskRecord {
    /// The due date as written, if present and non-empty.
    pub fn due_date_raw(&self) -> Option<&str> {
        self.due_date.as_deref().filter(|s| !s.trim().is_empty())
    }

    /// Calendar day the task is due on.
    ///
    /// Accepts RFC 3339 timestamps (the date is taken in the timestamp's own
    /// offset), naive `YYYY-MM-DDTHH:MM:SS` datetimes and bare `YYYY-MM-DD`
    /// dates. Returns `None` when absent or unparseable.
    pub fn due_on(&self) -> Option<NaiveDate> {
        self.due_date_raw().and_then(parse_calendar_day)
    }
}

fn parse_calendar_day(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
