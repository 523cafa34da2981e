use dioxus::prelude::*;
use shared_types::TaskRecord;
use shared_ui::Card;

use crate::badges::StatusBadge;
use crate::format_helpers::{format_due_date, format_progress};

#[component]
pub fn TasksPanel(tasks: Vec<TaskRecord>) -> Element {
    rsx! {
        div { class: "dashboard-column",
            h3 { class: "section-subtitle", "Tasks" }
            Card { class: "record-list",
                if tasks.is_empty() {
                    div { class: "section-placeholder", "No tasks yet" }
                }
                for task in tasks.iter() {
                    TaskRow { key: "{task.id}", task: task.clone() }
                }
            }
        }
    }
}

#[component]
fn TaskRow(task: TaskRecord) -> Element {
    let progress = format_progress(task.progress);
    let due = format_due_date(&task);

    rsx! {
        div { class: "record-row task-row",
            div { class: "record-heading",
                div { class: "record-title", "{task.title}" }
                StatusBadge { status: task.status.clone() }
            }
            div { class: "record-meta", "Progress: {progress} • Due: {due}" }
        }
    }
}
