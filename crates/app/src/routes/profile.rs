use crate::latency::sleep_ms;
use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdUser;
use dioxus_free_icons::Icon;
use shared_types::{AppError, ClientConfig, ProfileForm};
use shared_ui::{Alert, Badge, BadgeTone, Button, ButtonVariant, Card, FormField, PageHeader};

const SAVED_MESSAGE: &str = "Profile updated successfully";

/// Field name, label and input type for each editable profile value.
const PERSONAL_FIELDS: &[(&str, &str, &str)] = &[
    ("full_name", "Full Name", "text"),
    ("email", "Email", "email"),
    ("phone", "Phone", "tel"),
];

const ADDRESS_FIELDS: &[(&str, &str, &str)] = &[
    ("address", "Address", "text"),
    ("city", "City", "text"),
    ("state", "State", "text"),
    ("zip_code", "ZIP Code", "text"),
];

const EMERGENCY_FIELDS: &[(&str, &str, &str)] = &[
    ("emergency_contact", "Emergency Contact", "text"),
    ("emergency_phone", "Emergency Phone", "tel"),
];

fn field_value(form: &ProfileForm, name: &str) -> String {
    match name {
        "full_name" => form.full_name.clone(),
        "email" => form.email.clone(),
        "phone" => form.phone.clone(),
        "address" => form.address.clone(),
        "city" => form.city.clone(),
        "state" => form.state.clone(),
        "zip_code" => form.zip_code.clone(),
        "emergency_contact" => form.emergency_contact.clone(),
        "emergency_phone" => form.emergency_phone.clone(),
        _ => String::new(),
    }
}

fn set_field(form: &mut ProfileForm, name: &str, value: String) {
    let slot = match name {
        "full_name" => &mut form.full_name,
        "email" => &mut form.email,
        "phone" => &mut form.phone,
        "address" => &mut form.address,
        "city" => &mut form.city,
        "state" => &mut form.state,
        "zip_code" => &mut form.zip_code,
        "emergency_contact" => &mut form.emergency_contact,
        "emergency_phone" => &mut form.emergency_phone,
        _ => return,
    };
    *slot = value;
}

#[component]
pub fn Profile() -> Element {
    let config: ClientConfig = use_context();
    let session = use_session();
    let user = session.current_user();

    let initial = user.as_ref().map(ProfileForm::from_user).unwrap_or_default();
    let mut saved = use_signal(|| initial.clone());
    let mut draft = use_signal(|| initial);
    let mut editing = use_signal(|| false);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let handle_save = move |evt: FormEvent| async move {
        evt.prevent_default();
        notice.set(None);
        if let Err(e) = draft.read().check() {
            error.set(Some(e));
            return;
        }
        error.set(None);
        saving.set(true);
        sleep_ms(config.simulation.save_delay_ms).await;
        saved.set(draft());
        saving.set(false);
        editing.set(false);
        tracing::info!("profile saved");
        notice.set(Some(SAVED_MESSAGE.to_string()));
    };

    let handle_cancel = move |_| {
        draft.set(saved());
        error.set(None);
        editing.set(false);
    };

    let role_label = user.as_ref().map(|u| u.role.display_name()).unwrap_or_default();
    let shown = if editing() { draft() } else { saved() };
    let is_editing = editing();

    let field_error = move |name: &str| {
        error
            .read()
            .as_ref()
            .and_then(|e| e.field_errors.get(name).cloned())
    };

    let values = shown.clone();
    let section = move |fields: &'static [(&'static str, &'static str, &'static str)]| {
        let shown = values.clone();
        rsx! {
            div { class: "profile-grid",
                for (name, label, kind) in fields.iter().copied() {
                    if is_editing {
                        FormField {
                            key: "{name}",
                            label: label.to_string(),
                            name: name.to_string(),
                            input_type: kind.to_string(),
                            value: field_value(&shown, name),
                            error: field_error(name),
                            required: name == "full_name" || name == "email",
                            on_input: move |v: String| set_field(&mut draft.write(), name, v),
                        }
                    } else {
                        div { key: "{name}", class: "profile-fact",
                            span { class: "profile-fact-label", "{label}" }
                            span { class: "profile-fact-value",
                                {
                                    let value = field_value(&shown, name);
                                    if value.is_empty() { "Not provided".to_string() } else { value }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./profile.css") }

        div { class: "profile-page",
            PageHeader {
                title: "My Profile",
                subtitle: "Manage your personal information",
                if !is_editing {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            notice.set(None);
                            draft.set(saved());
                            editing.set(true);
                        },
                        "Edit Profile"
                    }
                }
            }

            if let Some(msg) = notice() {
                Alert { tone: BadgeTone::Success, "{msg}" }
            }
            if let Some(e) = error() {
                Alert { tone: BadgeTone::Danger, "{e.message}" }
            }

            Card { class: "profile-summary",
                div { class: "profile-identity",
                    div { class: "profile-avatar",
                        Icon::<LdUser> { icon: LdUser, width: 28, height: 28 }
                    }
                    div {
                        h2 { "{shown.full_name}" }
                        p { "{shown.email}" }
                    }
                    Badge { tone: BadgeTone::Info, "{role_label}" }
                }
            }

            form { class: "profile-form", onsubmit: handle_save,
                Card { title: "Personal Information", {section(PERSONAL_FIELDS)} }
                Card { title: "Address", {section(ADDRESS_FIELDS)} }
                Card { title: "Emergency Contact", {section(EMERGENCY_FIELDS)} }

                if is_editing {
                    div { class: "profile-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            disabled: saving(),
                            onclick: handle_cancel,
                            "Cancel"
                        }
                        Button {
                            button_type: "submit",
                            loading: saving(),
                            loading_text: "Saving...",
                            "Save Changes"
                        }
                    }
                }
            }
        }
    }
}
