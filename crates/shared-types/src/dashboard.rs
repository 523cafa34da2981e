use serde::{Deserialize, Serialize};

use crate::analytics::OverviewStats;
use crate::error::LoadError;
use crate::task::TaskRecord;
use crate::user::UserRecord;

/// Everything one successful load brings back.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardData {
    pub overview: OverviewStats,
    pub users: Vec<UserRecord>,
    pub tasks: Vec<TaskRecord>,
}

/// Page-level state for one dashboard session.
///
/// Starts in `Loading` and moves at most once, to `Loaded` or `Failed`.
/// The panels only ever see the accessors below, so a failed load looks
/// exactly like a load that never finished.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded(DashboardData),
    Failed(String),
}

impl LoadState {
    /// Collapse a load result. Every error becomes the same fixed message.
    pub fn from_result(result: Result<DashboardData, LoadError>) -> Self {
        match result {
            Ok(data) => LoadState::Loaded(data),
            Err(err) => LoadState::Failed(err.user_message().to_string()),
        }
    }

    pub fn overview(&self) -> Option<&OverviewStats> {
        match self {
            LoadState::Loaded(data) => Some(&data.overview),
            _ => None,
        }
    }

    pub fn users(&self) -> &[UserRecord] {
        match self {
            LoadState::Loaded(data) => &data.users,
            _ => &[],
        }
    }

    pub fn tasks(&self) -> &[TaskRecord] {
        match self {
            LoadState::Loaded(data) => &data.tasks,
            _ => &[],
        }
    }

    /// Banner text, set only after a failed load.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
