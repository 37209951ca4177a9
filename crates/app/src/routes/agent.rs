use crate::components::ClaimRow;
use crate::format_helpers::{format_inr_thousands, priority_tone};
use crate::routes::admin::AccessDenied;
use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdClock, LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{
    agent_recent_claims, agent_tasks, require_role, Role, TaskKind, AGENT_STATS,
};
use shared_ui::{Badge, BadgeTone, Card, ProgressBar, StatCard, StatGrid};

fn task_kind_label(kind: TaskKind) -> &'static str {
    match kind {
        TaskKind::ClaimReview => "Claim Review",
        TaskKind::CustomerCall => "Customer Call",
        TaskKind::DocumentReview => "Document Review",
    }
}

/// Daily workspace for insurance agents.
#[component]
pub fn AgentDashboard() -> Element {
    let session = use_session();

    if let Err(error) = require_role(session.role(), &[Role::Agent]) {
        return rsx! { AccessDenied { error } };
    }
    let Some(user) = session.current_user() else {
        return rsx! {};
    };

    let stats = AGENT_STATS;
    let progress = stats.target_progress_percent();
    let tasks = agent_tasks();
    let task_count = tasks.len();
    let claims = agent_recent_claims();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            div { class: "welcome-banner", "data-shell": "agent",
                div {
                    h1 { "Good day, {user.name}" }
                    p { "You have {stats.pending_claims} pending claims and {task_count} tasks scheduled today." }
                }
                Badge { tone: BadgeTone::Info, "Rank #{stats.rank}" }
            }

            StatGrid {
                StatCard {
                    label: "Assigned Claims",
                    value: "{stats.assigned_claims}",
                    hint: "{stats.pending_claims} pending",
                    tone: BadgeTone::Info,
                    icon: rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 22, height: 22 } },
                }
                StatCard {
                    label: "Completed Today",
                    value: "{stats.completed_today}",
                    hint: "Keep it up",
                    tone: BadgeTone::Success,
                    icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 22, height: 22 } },
                }
                StatCard {
                    label: "Customers",
                    value: "{stats.customers}",
                    hint: "{stats.performance}% satisfaction",
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 22, height: 22 } },
                }
                StatCard {
                    label: "Commission",
                    value: format_inr_thousands(stats.commission),
                    hint: "This month",
                    tone: BadgeTone::Warning,
                    icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 22, height: 22 } },
                }
            }

            Card {
                title: "Monthly Target",
                description: "{stats.assigned_claims} of {stats.monthly_target} claims",
                ProgressBar { label: "Claims handled", value: f64::from(progress) }
                ProgressBar { label: "Performance score", value: stats.performance }
            }

            div { class: "dashboard-columns",
                Card { title: "Today's Tasks",
                    for task in tasks {
                        div { key: "{task.id}", class: "task-row",
                            div { class: "task-row-head",
                                p { class: "task-row-title", "{task.title}" }
                                Badge { tone: priority_tone(task.priority), "{task.priority.display_name()}" }
                            }
                            div { class: "task-row-meta",
                                span { "{task_kind_label(task.kind)}" }
                                span { "{task.customer}" }
                                span { "Due {task.due_time}" }
                                span { "{task.estimated}" }
                            }
                        }
                    }
                }
                Card {
                    title: "Recent Claims",
                    actions: rsx! { Link { class: "card-link", to: Route::ClaimList {}, "View all →" } },
                    for claim in claims {
                        ClaimRow { key: "{claim.id}", claim: claim.clone(), show_priority: true, show_customer: true }
                    }
                }
            }
        }
    }
}
