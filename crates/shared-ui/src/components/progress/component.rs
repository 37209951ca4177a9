use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

/// Labelled progress bar. `value` is a percentage.
#[component]
pub fn ProgressBar(label: String, value: f64, #[props(default)] detail: Option<String>) -> Element {
    let value = value.clamp(0.0, 100.0);
    let detail = detail.unwrap_or_else(|| format!("{value:.0}%"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "progress-row",
            div { class: "progress-label-row",
                span { class: "progress-label", "{label}" }
                span { class: "progress-value", "{detail}" }
            }
            prim::Progress {
                class: "progress",
                value: Some(value),
                prim::ProgressIndicator { class: "progress-indicator" }
            }
        }
    }
}
