use dioxus::prelude::*;
use shared_types::OverviewStats;
use shared_ui::StatCard;

/// Five stat cards, or a loading line until the overview arrives.
#[component]
pub fn OverviewPanel(overview: Option<OverviewStats>) -> Element {
    rsx! {
        section { class: "dashboard-section",
            h2 { class: "section-title", "Overview" }
            match overview {
                Some(stats) => rsx! {
                    div { class: "overview-grid",
                        for (label, value) in stats.entries() {
                            StatCard { key: "{label}", label: "{label}", value: "{value}" }
                        }
                    }
                },
                None => rsx! {
                    div { class: "section-placeholder", "Loading overview…" }
                },
            }
        }
    }
}
