use dioxus::prelude::*;
use shared_types::UserRecord;
use shared_ui::Card;

use crate::badges::RoleBadge;

#[component]
pub fn PeoplePanel(users: Vec<UserRecord>) -> Element {
    rsx! {
        div { class: "dashboard-column",
            h3 { class: "section-subtitle", "People" }
            Card { class: "record-list",
                if users.is_empty() {
                    div { class: "section-placeholder", "No users yet" }
                }
                for user in users.iter() {
                    PersonRow { key: "{user.id}", user: user.clone() }
                }
            }
        }
    }
}

/// Name and email on the left, role badge on the right.
#[component]
fn PersonRow(user: UserRecord) -> Element {
    rsx! {
        div { class: "record-row person-row",
            div {
                div { class: "record-title", "{user.name}" }
                div { class: "record-meta", "{user.email}" }
            }
            RoleBadge { role: user.role.clone() }
        }
    }
}
