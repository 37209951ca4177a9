use dioxus::prelude::*;

#[component]
pub fn EmptyState(title: String, message: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "empty-state",
            h3 { class: "empty-state-title", "{title}" }
            p { class: "empty-state-message", "{message}" }
            div { class: "empty-state-action", {children} }
        }
    }
}
