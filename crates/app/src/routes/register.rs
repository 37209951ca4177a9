use crate::latency::sleep_ms;
use crate::routes::Route;
use crate::storage;
use dioxus::prelude::*;
use shared_types::{
    register_into, AppErrorKind, ClientConfig, RegistrationForm, Role, ALL_ROLES,
    REGISTERED_USERS_KEY, REGISTRATION_FAILED_MESSAGE,
};
use shared_ui::{
    Alert, BadgeTone, Button, ButtonVariant, FieldShell, FormField, LabeledCheckbox,
};

const REDIRECT_AFTER_SIGNUP_MS: u64 = 3000;

/// Self-service sign-up. Accounts are kept in browser storage only.
#[component]
pub fn Register() -> Element {
    let config: ClientConfig = use_context();
    let mut form = use_signal(RegistrationForm::default);
    let mut accepted_terms = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut error_field = use_signal(|| Option::<String>::None);
    let mut success_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| async move {
        evt.prevent_default();
        error_msg.set(None);
        error_field.set(None);
        success_msg.set(None);

        let submitted = form();
        if let Err(e) = submitted.check() {
            error_field.set(e.field_errors.keys().next().cloned());
            error_msg.set(Some(e.message));
            return;
        }

        loading.set(true);
        sleep_ms(config.simulation.register_delay_ms).await;

        let outcome = async {
            let stored = storage::read_item(REGISTERED_USERS_KEY).await?;
            let (user, serialized) = register_into(stored.as_deref(), &submitted, chrono::Utc::now())?;
            storage::write_item(REGISTERED_USERS_KEY, &serialized).await?;
            Ok::<_, shared_types::AppError>(user)
        }
        .await;

        match outcome {
            Ok(user) => {
                tracing::info!(user_id = %user.id, role = user.role.as_str(), "account registered");
                success_msg.set(Some(submitted.success_message()));
                form.set(RegistrationForm::default());
                accepted_terms.set(false);
                loading.set(false);

                sleep_ms(REDIRECT_AFTER_SIGNUP_MS).await;
                navigator().push(Route::Login {});
            }
            Err(e) => {
                let message = match e.kind {
                    AppErrorKind::Conflict => e.message,
                    _ => REGISTRATION_FAILED_MESSAGE.to_string(),
                };
                error_msg.set(Some(message));
                loading.set(false);
            }
        }
    };

    let field_error = move |name: &str| {
        if error_field.read().as_deref() == Some(name) {
            error_msg()
        } else {
            None
        }
    };

    let current = form();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            div { class: "auth-card auth-card-wide",
                div { class: "auth-hero",
                    h1 { class: "auth-brand", "InsureClaim" }
                    p { class: "auth-brand-tagline", "Insurance Claims Management" }
                }

                div { class: "auth-body",
                    div { class: "auth-heading",
                        h2 { "Create Account" }
                        p { "Join our insurance claims platform" }
                    }

                    div { class: "auth-demo-fill",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| {
                                form.set(RegistrationForm::demo(chrono::Utc::now()));
                                error_msg.set(None);
                                error_field.set(None);
                            },
                            "Fill with demo data"
                        }
                    }

                    if let Some(msg) = success_msg() {
                        Alert { tone: BadgeTone::Success, title: "Welcome aboard", "{msg}" }
                    }
                    if error_field.read().is_none() {
                        if let Some(err) = error_msg() {
                            Alert { tone: BadgeTone::Danger, "{err}" }
                        }
                    }

                    form { class: "auth-form", onsubmit: handle_register,
                        FormField {
                            label: "Full Name",
                            name: "full_name",
                            placeholder: "Enter your full name",
                            required: true,
                            value: current.full_name.clone(),
                            error: field_error("full_name"),
                            on_input: move |v: String| form.write().full_name = v,
                        }
                        FormField {
                            label: "Email address",
                            name: "email",
                            input_type: "email",
                            placeholder: "Enter your email",
                            required: true,
                            value: current.email.clone(),
                            error: field_error("email"),
                            on_input: move |v: String| form.write().email = v,
                        }
                        div { class: "auth-form-row",
                            FormField {
                                label: "Phone Number",
                                name: "phone",
                                input_type: "tel",
                                placeholder: "+91 9876543210",
                                value: current.phone.clone(),
                                on_input: move |v: String| form.write().phone = v,
                            }
                            FieldShell { label: "Account Type", name: "role",
                                select {
                                    id: "role",
                                    class: "form-input",
                                    value: current.role.as_str(),
                                    onchange: move |evt: FormEvent| {
                                        form.write().role = Role::from_str_or_default(&evt.value());
                                    },
                                    for role in ALL_ROLES.iter() {
                                        option {
                                            key: "{role.as_str()}",
                                            value: role.as_str(),
                                            selected: *role == current.role,
                                            "{role.display_name()}"
                                        }
                                    }
                                }
                            }
                        }
                        FormField {
                            label: "Address",
                            name: "address",
                            placeholder: "Street, city, state, PIN",
                            value: current.address.clone(),
                            on_input: move |v: String| form.write().address = v,
                        }
                        FormField {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            placeholder: "At least 6 characters",
                            required: true,
                            value: current.password.clone(),
                            error: field_error("password"),
                            on_input: move |v: String| form.write().password = v,
                        }
                        FormField {
                            label: "Confirm Password",
                            name: "confirm_password",
                            input_type: "password",
                            placeholder: "Confirm your password",
                            required: true,
                            value: current.confirm_password.clone(),
                            error: field_error("confirm_password"),
                            on_input: move |v: String| form.write().confirm_password = v,
                        }

                        div { class: "auth-terms",
                            LabeledCheckbox {
                                id: "terms",
                                checked: accepted_terms(),
                                on_change: move |checked: bool| accepted_terms.set(checked),
                                "I agree to the Terms and Conditions and Privacy Policy"
                            }
                        }

                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: !accepted_terms(),
                            loading: loading(),
                            loading_text: "Creating account...",
                            "Create Account"
                        }
                    }
                }

                div { class: "auth-footer",
                    "Already have an account? "
                    Link { to: Route::Login {}, "Sign in here" }
                }
            }
        }
    }
}
