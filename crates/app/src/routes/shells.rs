use crate::components::{Breadcrumbs, SectionIcon};
use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdLogOut, LdPlus};
use dioxus_free_icons::Icon;
use shared_types::{LayoutShell, SessionUser, AGENT_STATS};
use shared_ui::{Badge, BadgeTone};

/// Admin wrapper: system-wide navigation and an alert indicator.
#[component]
pub fn AdminShell(user: SessionUser, path: String, children: Element) -> Element {
    rsx! {
        ShellFrame { shell: LayoutShell::Admin, user, path,
            header_extra: rsx! {
                Link { class: "shell-header-action", to: Route::AdminDashboard {},
                    Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                    span { class: "sr-only", "System alerts" }
                }
            },
            {children}
        }
    }
}

/// Agent wrapper: shows the day's progress next to the breadcrumb.
#[component]
pub fn AgentShell(user: SessionUser, path: String, children: Element) -> Element {
    let done = AGENT_STATS.completed_today;
    rsx! {
        ShellFrame { shell: LayoutShell::Agent, user, path,
            header_extra: rsx! {
                Badge { tone: BadgeTone::Info, "{done} completed today" }
            },
            {children}
        }
    }
}

/// Customer wrapper: a persistent shortcut to file a claim.
#[component]
pub fn CustomerShell(user: SessionUser, path: String, children: Element) -> Element {
    rsx! {
        ShellFrame { shell: LayoutShell::Customer, user, path,
            header_extra: rsx! {
                Link { class: "shell-header-cta", to: Route::NewClaim {},
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "New Claim"
                }
            },
            {children}
        }
    }
}

/// Sidebar, header and content area common to every shell.
#[component]
fn ShellFrame(
    shell: LayoutShell,
    user: SessionUser,
    path: String,
    #[props(default)] header_extra: Option<Element>,
    children: Element,
) -> Element {
    let mut session = use_session();
    let mut signing_out = use_signal(|| false);

    let handle_logout = move |_| async move {
        signing_out.set(true);
        if let Err(e) = server::api::logout().await {
            tracing::warn!(error = %e, "logout request failed");
        }
        session.sign_out();
        navigator().push(Route::Login {});
    };

    let initial = user.initial();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./shells.css") }

        div { class: "shell", "data-shell": shell.css_key(),
            aside { class: "shell-sidebar",
                div { class: "shell-brand",
                    span { class: "shell-brand-name", "InsureClaim" }
                    span { class: "shell-brand-tagline", "{shell.tagline()}" }
                }

                nav { class: "shell-nav",
                    for item in shell.nav_items().iter() {
                        Link {
                            key: "{item.href}",
                            class: if shell.is_nav_active(item, &path) { "shell-nav-link active" } else { "shell-nav-link" },
                            to: item.href,
                            SectionIcon { icon: item.icon, size: 18 }
                            span { "{item.label}" }
                        }
                    }
                }

                div { class: "shell-user",
                    div { class: "shell-avatar", "{initial}" }
                    div { class: "shell-user-text",
                        span { class: "shell-user-name", "{user.name}" }
                        span { class: "shell-user-email", "{user.email}" }
                    }
                    button {
                        class: "shell-logout",
                        r#type: "button",
                        title: "Sign out",
                        disabled: signing_out(),
                        onclick: handle_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 18, height: 18 }
                    }
                }
            }

            div { class: "shell-main",
                header { class: "shell-header",
                    Breadcrumbs { path: path.clone() }
                    div { class: "shell-header-spacer" }
                    {header_extra}
                }
                main { class: "shell-content", {children} }
            }
        }
    }
}
