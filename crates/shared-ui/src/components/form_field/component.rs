use dioxus::prelude::*;

/// Labelled form control with an inline error line.
///
/// Text-like inputs only. Selects and textareas are composed by pages
/// around [`FieldShell`].
#[component]
pub fn FormField(
    label: String,
    name: String,
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "form-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let invalid = error.is_some();

    rsx! {
        FieldShell { label, name: name.clone(), error, required,
            input {
                id: "{name}",
                name: "{name}",
                r#type: "{input_type}",
                value,
                placeholder,
                disabled,
                required,
                "aria-invalid": invalid,
                oninput: move |evt| on_input.call(evt.value()),
                ..merged,
            }
        }
    }
}

/// Label, control slot and error line shared by every form control.
#[component]
pub fn FieldShell(
    label: String,
    name: String,
    #[props(default)] error: Option<String>,
    #[props(default = false)] required: bool,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-field", "data-invalid": error.is_some(),
            label { class: "form-label", r#for: "{name}",
                "{label}"
                if required {
                    span { class: "form-required", " *" }
                }
            }
            {children}
            if let Some(message) = error {
                p { class: "form-error", role: "alert", "{message}" }
            }
        }
    }
}
