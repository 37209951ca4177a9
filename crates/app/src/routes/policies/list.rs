use crate::format_helpers::{format_date_human, format_inr, policy_status_tone};
use crate::latency::sleep_ms;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{sample_policies, ClientConfig, PolicyFilter, PolicySummary, POLICY_FILTERS};
use shared_ui::{Badge, BadgeTone, Card, EmptyState, PageHeader, Skeleton, StatCard, StatGrid};

#[component]
pub fn PolicyList() -> Element {
    let config: ClientConfig = use_context();
    let mut filter = use_signal(PolicyFilter::default);

    let policies = use_resource(move || async move {
        sleep_ms(config.simulation.load_delay_ms).await;
        sample_policies()
    });

    let body = match &*policies.read() {
        None => rsx! {
            div { class: "list-skeleton",
                for i in 0..3 {
                    Skeleton { key: "{i}", class: "skeleton-row" }
                }
            }
        },
        Some(all) => {
            let summary = PolicySummary::of(all);
            let active = filter();
            let visible: Vec<_> = active.apply(all).into_iter().cloned().collect();
            rsx! {
                StatGrid {
                    StatCard {
                        label: "Active Policies",
                        value: "{summary.active}",
                        tone: BadgeTone::Success,
                    }
                    StatCard {
                        label: "Monthly Premium",
                        value: format_inr(summary.monthly_premium),
                        hint: "Active policies only",
                        tone: BadgeTone::Info,
                    }
                    StatCard {
                        label: "Policies",
                        value: "{summary.total}",
                        hint: "On file",
                    }
                }

                div { class: "filter-chips", role: "group", "aria-label": "Filter policies",
                    for option in POLICY_FILTERS.iter().copied() {
                        button {
                            key: "{option.label()}",
                            r#type: "button",
                            class: "filter-chip",
                            "aria-pressed": active == option,
                            onclick: move |_| filter.set(option),
                            "{option.label()}"
                        }
                    }
                }

                if visible.is_empty() {
                    EmptyState {
                        title: "No policies found",
                        message: "No policies match this filter.",
                    }
                } else {
                    div { class: "policy-grid",
                        for policy in visible {
                            Card {
                                key: "{policy.id}",
                                title: "{policy.policy_type.display_name()}",
                                description: "{policy.policy_number}",
                                actions: rsx! {
                                    Badge { tone: policy_status_tone(policy.status), "{policy.status.as_str()}" }
                                },
                                p { class: "policy-description", "{policy.description}" }
                                dl { class: "policy-facts",
                                    dt { "Coverage" }
                                    dd { "{policy.coverage}" }
                                    dt { "Premium" }
                                    dd { "{format_inr(policy.premium)}/month" }
                                    dt { "Next Payment" }
                                    dd { "{format_date_human(&policy.next_payment)}" }
                                }
                                Link {
                                    class: "card-link",
                                    to: Route::PolicyDetail { id: policy.policy_number.clone() },
                                    "View details →"
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./policies.css") }

        div { class: "policies-page",
            PageHeader {
                title: "My Policies",
                subtitle: "Coverage, premiums and renewal dates",
            }
            {body}
        }
    }
}
