use serde::{Deserialize, Serialize};

/// Aggregate counts served by `GET /analytics/overview`.
///
/// Values are trusted as provided; nothing checks that the status counts
/// add up to `tasks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OverviewStats {
    #[serde(default)]
    pub users: i64,
    #[serde(default)]
    pub tasks: i64,
    #[serde(default)]
    pub completed: i64,
    #[serde(default)]
    pub in_progress: i64,
    #[serde(default)]
    pub pending: i64,
}

/// Display labels for the overview cards, in render order.
pub const OVERVIEW_LABELS: [&str; 5] = ["Users", "Tasks", "Completed", "In Progress", "Pending"];

impl OverviewStats {
    /// Pair each overview label with its value, in render order.
    pub fn entries(&self) -> [(&'static str, i64); 5] {
        [
            (OVERVIEW_LABELS[0], self.users),
            (OVERVIEW_LABELS[1], self.tasks),
            (OVERVIEW_LABELS[2], self.completed),
            (OVERVIEW_LABELS[3], self.in_progress),
            (OVERVIEW_LABELS[4], self.pending),
        ]
    }
}
