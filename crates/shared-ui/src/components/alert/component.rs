use dioxus::prelude::*;

use crate::BadgeTone;

/// Inline banner for form errors and confirmations.
#[component]
pub fn Alert(
    #[props(default)] tone: BadgeTone,
    #[props(default)] title: Option<String>,
    children: Element,
) -> Element {
    let role = match tone {
        BadgeTone::Danger | BadgeTone::Warning => "alert",
        _ => "status",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "alert", "data-tone": tone.as_str(), role,
            if let Some(title) = title {
                p { class: "alert-title", "{title}" }
            }
            div { class: "alert-body", {children} }
        }
    }
}
