use dioxus::prelude::*;
use shared_types::DashboardConfig;

pub mod api;
pub mod badges;
pub mod format_helpers;
mod routes;
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    // Desktop builds read BACKEND_URL from a local .env; web builds bake it in at compile time.
    #[cfg(feature = "desktop")]
    let _ = dotenvy::dotenv();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(DashboardConfig::from_env);

    use_hook(move || {
        if config.is_same_origin() {
            tracing::info!("Backend URL not set, using same-origin requests");
        } else {
            tracing::info!(backend = %config.backend_url, "Using configured backend");
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
