use dioxus::prelude::*;
use shared_types::{TaskStatus, UserRole};
use shared_ui::{Badge, BadgeTone};

/// Badge tone for a role. Unknown roles get the neutral gray.
pub fn role_tone(role: &UserRole) -> BadgeTone {
    match role {
        UserRole::Md => BadgeTone::Purple,
        UserRole::Ceo => BadgeTone::Indigo,
        UserRole::Coo => BadgeTone::Blue,
        UserRole::Manager => BadgeTone::Emerald,
        UserRole::Employee => BadgeTone::Gray,
        UserRole::Other(_) => BadgeTone::Gray,
    }
}

/// Badge tone for a task status. Only completed and in-progress tasks are
/// highlighted; pending and unknown statuses stay slate.
pub fn status_tone(status: &TaskStatus) -> BadgeTone {
    match status {
        TaskStatus::Completed => BadgeTone::Emerald,
        TaskStatus::InProgress => BadgeTone::Amber,
        TaskStatus::Pending | TaskStatus::Other(_) => BadgeTone::Slate,
    }
}

#[component]
pub fn RoleBadge(role: UserRole) -> Element {
    let tone = role_tone(&role);
    let label = role.as_str();

    rsx! {
        Badge { tone: tone, "{label}" }
    }
}

#[component]
pub fn StatusBadge(status: TaskStatus) -> Element {
    let tone = status_tone(&status);
    let label = status.as_str();

    rsx! {
        Badge { tone: tone, "{label}" }
    }
}
