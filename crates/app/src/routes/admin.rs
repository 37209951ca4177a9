use crate::components::{AnalysisSummary, ClaimRow};
use crate::format_helpers::{alert_label, alert_tone, format_count, format_inr_millions};
use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdClock, LdFileText, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{
    admin_recent_claims, require_role, system_alerts, AppError, ClaimAnalysis, ClaimFacts, Role,
    ADMIN_STATS,
};
use shared_ui::{
    Alert, Badge, BadgeTone, Card, EmptyState, PageHeader, StatCard, StatGrid, TabContent,
    TabList, TabTrigger, Tabs,
};

/// System overview for administrators.
#[component]
pub fn AdminDashboard() -> Element {
    let session = use_session();

    if let Err(error) = require_role(session.role(), &[Role::Admin]) {
        return rsx! { AccessDenied { error } };
    }

    let stats = ADMIN_STATS;
    let claims = admin_recent_claims();
    let no_claims = claims.is_empty();
    let alerts = system_alerts();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader {
                title: "Admin Dashboard",
                subtitle: "System-wide claims, users and alerts",
            }

            StatGrid {
                StatCard {
                    label: "Total Users",
                    value: format_count(stats.total_users),
                    hint: "+{stats.monthly_growth}% this month",
                    tone: BadgeTone::Info,
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 22, height: 22 } },
                }
                StatCard {
                    label: "Total Claims",
                    value: format_count(stats.total_claims),
                    hint: "{format_count(stats.approved_claims)} approved",
                    tone: BadgeTone::Success,
                    icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 22, height: 22 } },
                }
                StatCard {
                    label: "Pending Claims",
                    value: format_count(stats.pending_claims),
                    hint: "{format_count(stats.rejected_claims)} rejected",
                    tone: BadgeTone::Warning,
                    icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 22, height: 22 } },
                }
                StatCard {
                    label: "System Revenue",
                    value: format_inr_millions(stats.system_revenue),
                    hint: "{format_count(stats.total_policies)} policies",
                    icon: rsx! { Icon::<LdBell> { icon: LdBell, width: 22, height: 22 } },
                }
            }

            Tabs { default_value: "overview", horizontal: true,
                TabList {
                    TabTrigger { value: "overview", index: 0usize, "Overview" }
                    TabTrigger { value: "claims", index: 1usize, "Claims" }
                    TabTrigger { value: "alerts", index: 2usize, "Alerts" }
                }
                TabContent { value: "overview", index: 0usize,
                    div { class: "dashboard-columns",
                        Card {
                            title: "Recent Claims",
                            actions: rsx! { Link { class: "card-link", to: Route::ClaimList {}, "View all →" } },
                            for claim in claims.iter() {
                                ClaimRow { key: "{claim.id}", claim: claim.clone(), show_priority: true, show_customer: true }
                            }
                        }
                        Card { title: "System Alerts",
                            for alert in alerts.iter() {
                                Alert { key: "{alert.id}", tone: alert_tone(alert.level),
                                    "{alert.message}"
                                    span { class: "alert-time", " · {alert.time}" }
                                }
                            }
                        }
                    }
                }
                TabContent { value: "claims", index: 1usize,
                    Card { title: "Claims Requiring Attention",
                        if no_claims {
                            EmptyState { title: "No claims", message: "Nothing needs review right now." }
                        }
                        for claim in claims.iter() {
                            div { key: "{claim.id}", class: "review-row",
                                ClaimRow { claim: claim.clone(), show_priority: true, show_customer: true }
                                AnalysisSummary { analysis: ClaimAnalysis::of(&ClaimFacts::from(claim)) }
                            }
                        }
                    }
                }
                TabContent { value: "alerts", index: 2usize,
                    Card { title: "All Alerts",
                        for alert in alerts.iter() {
                            div { key: "{alert.id}", class: "alert-row",
                                Badge { tone: alert_tone(alert.level), "{alert_label(alert.level)}" }
                                span { class: "alert-row-message", "{alert.message}" }
                                span { class: "alert-row-time", "{alert.time}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Shown to signed-in users whose role may not open the page.
#[component]
pub fn AccessDenied(error: AppError) -> Element {
    let session = use_session();
    let home = session.shell().home_route();
    tracing::debug!(kind = %error.kind, "access denied");

    rsx! {
        div { class: "access-denied",
            EmptyState {
                title: "Access Denied",
                message: "{error.message}",
                Link { class: "button-link", to: home, "Back to your dashboard" }
            }
        }
    }
}
