use crate::components::ClaimRow;
use crate::format_helpers::{format_inr_lakhs, policy_status_tone};
use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdFileText, LdPlus, LdShield, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::{customer_recent_claims, sample_policies, PolicyStatus, Role, CUSTOMER_STATS};
use shared_ui::{Badge, BadgeTone, Card, StatCard, StatGrid};

/// Customer landing page. Admins and agents are sent to their own dashboards.
#[component]
pub fn CustomerHome() -> Element {
    let session = use_session();
    let Some(user) = session.current_user() else {
        return rsx! {};
    };

    match user.role {
        Role::Admin => {
            navigator().replace(Route::AdminDashboard {});
            return rsx! {};
        }
        Role::Agent => {
            navigator().replace(Route::AgentDashboard {});
            return rsx! {};
        }
        Role::Customer => {}
    }

    let stats = CUSTOMER_STATS;
    let claims = customer_recent_claims();
    let policies: Vec<_> = sample_policies()
        .into_iter()
        .filter(|p| p.status == PolicyStatus::Active)
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            div { class: "welcome-banner", "data-shell": "customer",
                div {
                    h1 { "Welcome back, {user.name}!" }
                    p { "Here's an overview of your insurance portfolio and recent activities." }
                }
                Link { class: "welcome-banner-action", to: Route::NewClaim {},
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "Submit New Claim"
                }
            }

            StatGrid {
                StatCard {
                    label: "Total Claims",
                    value: "{stats.total_claims}",
                    hint: "Active claims",
                    tone: BadgeTone::Info,
                    icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 22, height: 22 } },
                }
                StatCard {
                    label: "Pending Claims",
                    value: "{stats.pending_claims}",
                    hint: "Under review",
                    tone: BadgeTone::Warning,
                    icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 22, height: 22 } },
                }
                StatCard {
                    label: "Approved Claims",
                    value: "{stats.approved_claims}",
                    hint: "Completed",
                    tone: BadgeTone::Success,
                    icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 22, height: 22 } },
                }
                StatCard {
                    label: "Total Amount",
                    value: format_inr_lakhs(stats.total_claim_amount),
                    hint: "Claimed",
                    icon: rsx! { Icon::<LdShield> { icon: LdShield, width: 22, height: 22 } },
                }
            }

            Card { title: "Quick Actions",
                div { class: "quick-actions",
                    Link { class: "quick-action", to: Route::NewClaim {},
                        h4 { "Submit New Claim" }
                        p { "File a new insurance claim" }
                    }
                    Link { class: "quick-action", to: Route::PolicyList {},
                        h4 { "View Policies" }
                        p { "Manage your insurance policies" }
                    }
                    Link { class: "quick-action", to: Route::Profile {},
                        h4 { "Update Profile" }
                        p { "Keep your contact details current" }
                    }
                }
            }

            div { class: "dashboard-columns",
                Card {
                    title: "Recent Claims",
                    actions: rsx! { Link { class: "card-link", to: Route::ClaimList {}, "View all →" } },
                    for claim in claims {
                        ClaimRow { key: "{claim.id}", claim: claim.clone() }
                    }
                }
                Card {
                    title: "Active Policies",
                    actions: rsx! { Link { class: "card-link", to: Route::PolicyList {}, "View all →" } },
                    for policy in policies {
                        Link {
                            key: "{policy.id}",
                            class: "policy-row",
                            to: Route::PolicyDetail { id: policy.policy_number.clone() },
                            div { class: "policy-row-head",
                                div {
                                    p { class: "policy-row-number", "{policy.policy_number}" }
                                    p { class: "policy-row-type", "{policy.policy_type.display_name()}" }
                                }
                                Badge { tone: policy_status_tone(policy.status), "{policy.status.as_str()}" }
                            }
                            dl { class: "policy-row-facts",
                                dt { "Coverage" }
                                dd { "{policy.coverage}" }
                                dt { "Next Payment" }
                                dd { "{policy.next_payment}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
