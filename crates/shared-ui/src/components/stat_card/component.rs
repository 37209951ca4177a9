use dioxus::prelude::*;

use crate::BadgeTone;

/// Headline figure with a caption, used in dashboard stat grids.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] hint: Option<String>,
    #[props(default)] tone: BadgeTone,
    #[props(default)] icon: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card", "data-tone": tone.as_str(),
            if let Some(icon) = icon {
                div { class: "stat-card-icon", {icon} }
            }
            div {
                p { class: "stat-card-label", "{label}" }
                p { class: "stat-card-value", "{value}" }
                if let Some(hint) = hint {
                    p { class: "stat-card-hint", "{hint}" }
                }
            }
        }
    }
}

/// Responsive grid for a row of [`StatCard`]s.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        div { class: "stat-grid", {children} }
    }
}
