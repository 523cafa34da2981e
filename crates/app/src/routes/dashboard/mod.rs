pub mod overview;
pub mod people;
pub mod tasks;

use dioxus::prelude::*;
use shared_types::{DashboardConfig, LoadState};
use shared_ui::Alert;

use crate::api::{load_dashboard, BackendClient};
use overview::OverviewPanel;
use people::PeoplePanel;
use tasks::TasksPanel;

/// Dashboard page: loads once on mount, then renders whatever state it has.
///
/// The resource reads no signals, so it never re-runs for the lifetime of
/// the page.
#[component]
pub fn Dashboard() -> Element {
    let config = use_context::<DashboardConfig>();
    let client = use_hook(move || BackendClient::new(config));

    let load = use_resource(move || {
        let client = client.clone();
        async move { LoadState::from_result(load_dashboard(&client).await) }
    });

    let state = load.read().as_ref().cloned().unwrap_or_default();

    rsx! {
        DashboardView { state: state }
    }
}

/// Pure rendering of one [`LoadState`].
#[component]
pub fn DashboardView(state: LoadState) -> Element {
    let overview = state.overview().copied();
    let users = state.users().to_vec();
    let tasks = state.tasks().to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            if let Some(message) = state.error() {
                Alert { "{message}" }
            }

            OverviewPanel { overview: overview }

            section { class: "dashboard-lists",
                PeoplePanel { users: users }
                TasksPanel { tasks: tasks }
            }
        }
    }
}
