use crate::latency::sleep_ms;
use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{AppError, ClientConfig, DemoAccount, DEMO_ACCOUNTS};
use shared_ui::{
    Alert, BadgeTone, Button, ButtonVariant, Collapsible, CollapsibleContent, CollapsibleTrigger,
    FormField,
};
use std::collections::HashMap;

/// Sign-in page with the demo account picker.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let config: ClientConfig = use_context();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);
    let mut show_demo = use_signal(|| false);

    // Already signed in: go straight to the dashboard
    if session.current_user().is_some() {
        navigator().replace(Route::CustomerHome {});
    }

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        loading.set(true);
        error_msg.set(None);
        field_errors.set(HashMap::new());

        sleep_ms(config.simulation.login_delay_ms).await;

        match server::api::login(email(), password()).await {
            Ok(user) => {
                session.sign_in(user);
                navigator().push(Route::CustomerHome {});
            }
            Err(e) => {
                let err_str = e.to_string();
                let fe = AppError::parse_field_errors(&err_str);
                if fe.is_empty() {
                    error_msg.set(Some(AppError::friendly_message(&err_str)));
                } else {
                    field_errors.set(fe);
                }
            }
        }
        loading.set(false);
    };

    let mut use_account = move |account: &DemoAccount| {
        email.set(account.email.to_string());
        password.set(account.password.to_string());
        error_msg.set(None);
        field_errors.set(HashMap::new());
        show_demo.set(false);
    };

    let can_submit = !email.read().is_empty() && !password.read().is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            div { class: "auth-card",
                div { class: "auth-hero",
                    h1 { class: "auth-brand", "InsureClaim" }
                    p { class: "auth-brand-tagline", "Insurance Claims Management" }
                }

                div { class: "auth-body",
                    div { class: "auth-heading",
                        h2 { "Welcome Back" }
                        p { "Sign in to access your dashboard" }
                    }

                    if config.demo_accounts {
                        Collapsible {
                            class: "demo-accounts",
                            open: Some(show_demo()),
                            on_open_change: move |open: bool| show_demo.set(open),
                            div { class: "demo-accounts-header",
                                h3 { "Demo Accounts" }
                                CollapsibleTrigger {
                                    span { class: "demo-accounts-toggle",
                                        if show_demo() { "Hide" } else { "Show" }
                                    }
                                }
                            }
                            CollapsibleContent {
                                ul { class: "demo-accounts-list",
                                    for account in DEMO_ACCOUNTS.iter() {
                                        li { key: "{account.email}", class: "demo-account",
                                            div { class: "demo-account-avatar",
                                                {account.name.chars().next().map(String::from).unwrap_or_default()}
                                            }
                                            div { class: "demo-account-text",
                                                p { class: "demo-account-name", "{account.name}" }
                                                p { class: "demo-account-email", "{account.email}" }
                                                p { class: "demo-account-role", "Role: {account.role.as_str()}" }
                                            }
                                            Button {
                                                variant: ButtonVariant::Secondary,
                                                onclick: move |_| use_account(account),
                                                "Use"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    form { class: "auth-form", onsubmit: handle_login,
                        if let Some(err) = error_msg() {
                            Alert { tone: BadgeTone::Danger, "{err}" }
                        }

                        FormField {
                            label: "Email address",
                            name: "email",
                            input_type: "email",
                            placeholder: "Enter your email",
                            required: true,
                            value: email(),
                            error: field_errors.read().get("email").cloned(),
                            on_input: move |v: String| email.set(v),
                        }
                        FormField {
                            label: "Password",
                            name: "password",
                            input_type: "password",
                            placeholder: "Enter your password",
                            required: true,
                            value: password(),
                            error: field_errors.read().get("password").cloned(),
                            on_input: move |v: String| password.set(v),
                        }

                        Button {
                            button_type: "submit",
                            class: "auth-submit",
                            disabled: !can_submit,
                            loading: loading(),
                            loading_text: "Signing in...",
                            "Sign in"
                        }
                    }
                }

                div { class: "auth-footer",
                    "Don't have an account? "
                    Link { to: Route::Register {}, "Create one here" }
                }
            }
        }
    }
}
