use dioxus::prelude::*;

/// Bordered panel. With a `title` it renders its own header row, and any
/// `actions` are placed on the right side of that row.
#[component]
pub fn Card(
    #[props(default)] title: Option<String>,
    #[props(default)] description: Option<String>,
    #[props(default)] actions: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        section {
            ..merged,
            if title.is_some() || actions.is_some() {
                header { class: "card-header",
                    div {
                        if let Some(title) = title {
                            h3 { class: "card-title", "{title}" }
                        }
                        if let Some(description) = description {
                            p { class: "card-description", "{description}" }
                        }
                    }
                    if let Some(actions) = actions {
                        div { class: "card-actions", {actions} }
                    }
                }
            }
            div { class: "card-content", {children} }
        }
    }
}
