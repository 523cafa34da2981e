use dioxus::prelude::*;

/// Colour tone for badges.
///
/// Tones are purely visual; callers decide which tone a value maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeTone {
    Purple,
    Indigo,
    Blue,
    Emerald,
    Amber,
    #[default]
    Gray,
    Slate,
}

impl BadgeTone {
    /// Value of the `data-tone` attribute the stylesheet keys on.
    pub fn class(&self) -> &'static str {
        match self {
            BadgeTone::Purple => "purple",
            BadgeTone::Indigo => "indigo",
            BadgeTone::Blue => "blue",
            BadgeTone::Emerald => "emerald",
            BadgeTone::Amber => "amber",
            BadgeTone::Gray => "gray",
            BadgeTone::Slate => "slate",
        }
    }
}

/// A pill-shaped badge for inline categorical labels.
#[component]
pub fn Badge(
    #[props(default)] tone: BadgeTone,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-tone", tone.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}
