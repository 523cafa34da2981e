pub mod dashboard;
pub mod not_found;

use dioxus::prelude::*;
use shared_types::hierarchy_line;
use shared_ui::{PageCaption, PageHeader, PageTitle};

use dashboard::Dashboard;
use not_found::NotFound;

pub const APP_TITLE: &str = "Trimkart – Hierarchical Tracking";
pub const FOOTER_TEXT: &str = "© Trimkart by Coders Sectors";

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Dashboard {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Header, main column and footer around every page.
#[component]
fn AppLayout() -> Element {
    rsx! {
        AppShell {
            Outlet::<Route> {}
        }
    }
}

/// Page chrome, kept separate from the router so it renders on its own.
#[component]
pub fn AppShell(children: Element) -> Element {
    let chain = hierarchy_line();

    rsx! {
        div { class: "app-shell",
            PageHeader {
                PageTitle { "{APP_TITLE}" }
                PageCaption { "{chain}" }
            }
            main { class: "app-main",
                {children}
            }
            footer { class: "app-footer", "{FOOTER_TEXT}" }
        }
    }
}
