use dioxus::prelude::*;

/// Sticky page header: a title on the left and a caption on the right.
#[component]
pub fn PageHeader(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        header { class: "page-header",
            div { class: "page-header-inner",
                {children}
            }
        }
    }
}

/// Page title element rendered as an h1.
#[component]
pub fn PageTitle(children: Element) -> Element {
    rsx! {
        h1 { class: "page-title", {children} }
    }
}

/// Muted text shown opposite the title.
#[component]
pub fn PageCaption(children: Element) -> Element {
    rsx! {
        div { class: "page-caption", {children} }
    }
}
