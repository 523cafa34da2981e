use dioxus::prelude::*;
use shared_ui::Card;

use crate::routes::{AppShell, Route};

/// Fallback for any path the dashboard does not serve. Keeps the header and
/// footer so the user can still see which app they are in.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        AppShell {
            Card { class: "unknown-path",
                UnknownPath { path }
                Link { to: Route::Dashboard {}, class: "unknown-path-back", "Back to the dashboard" }
            }
        }
    }
}

/// Status code and the path that missed.
#[component]
pub fn UnknownPath(path: String) -> Element {
    rsx! {
        div { class: "unknown-path-code", "404" }
        p { class: "unknown-path-text",
            "Nothing is tracked at "
            code { "{path}" }
            "."
        }
    }
}
