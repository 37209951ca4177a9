use dioxus::prelude::*;

/// Pulsing placeholder block.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
        }
    }
}

/// Centered spinner with an optional caption.
#[component]
pub fn LoadingSpinner(#[props(default)] message: Option<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "loading-spinner", role: "status", "aria-live": "polite",
            span { class: "loading-spinner-ring" }
            if let Some(message) = message {
                p { class: "loading-spinner-text", "{message}" }
            }
        }
    }
}
