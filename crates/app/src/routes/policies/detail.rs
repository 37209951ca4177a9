use crate::format_helpers::{format_date_human, format_inr, policy_status_tone};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{find_policy, sample_policies};
use shared_ui::{Badge, Card, EmptyState, PageHeader};

/// A single policy, looked up by policy number or id.
#[component]
pub fn PolicyDetail(id: String) -> Element {
    let policies = sample_policies();

    let policy = match find_policy(&policies, &id) {
        Ok(policy) => policy.clone(),
        Err(err) => return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./policies.css") }
            div { class: "policies-page",
                EmptyState {
                    title: "{err.message}",
                    message: "We couldn't find a policy with the number {id}.",
                    Link { class: "button-link", to: Route::PolicyList {}, "Back to policies" }
                }
            }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./policies.css") }

        div { class: "policies-page",
            PageHeader {
                title: "{policy.policy_number}",
                subtitle: "{policy.policy_type.display_name()}",
                Badge { tone: policy_status_tone(policy.status), "{policy.status.as_str()}" }
            }

            Card { title: "Coverage", description: "{policy.description}",
                dl { class: "policy-facts",
                    dt { "Coverage amount" }
                    dd { "{policy.coverage}" }
                    dt { "Monthly premium" }
                    dd { "{format_inr(policy.premium)}" }
                    dt { "Annual premium" }
                    dd { "{format_inr(policy.premium * 12.0)}" }
                }
            }

            Card { title: "Term",
                dl { class: "policy-facts",
                    dt { "Start date" }
                    dd { "{format_date_human(&policy.start_date)}" }
                    dt { "End date" }
                    dd { "{format_date_human(&policy.end_date)}" }
                    dt { "Next payment" }
                    dd { "{format_date_human(&policy.next_payment)}" }
                }
            }

            div { class: "policy-detail-actions",
                Link { class: "button-link", to: Route::NewClaim {}, "File a claim on this policy" }
                Link { class: "card-link", to: Route::PolicyList {}, "← All policies" }
            }
        }
    }
}
