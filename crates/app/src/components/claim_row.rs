use crate::format_helpers::{format_date_human, format_inr, priority_tone, status_label, status_tone};
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::ClaimRecord;
use shared_ui::Badge;

/// One claim in a list, linking to its detail page.
#[component]
pub fn ClaimRow(
    claim: ClaimRecord,
    #[props(default = false)] show_priority: bool,
    #[props(default = false)] show_customer: bool,
) -> Element {
    let date = format_date_human(&claim.submitted_date);
    let amount = format_inr(claim.amount);
    let target = Route::ClaimDetail { id: claim.id.clone() };

    rsx! {
        Link { class: "claim-row", to: target,
            div { class: "claim-row-head",
                div {
                    p { class: "claim-row-number", "{claim.claim_number}" }
                    p { class: "claim-row-type", "{claim.claim_type.display_name()}" }
                }
                div { class: "claim-row-badges",
                    if show_priority {
                        Badge { tone: priority_tone(claim.priority), "{claim.priority.display_name()}" }
                    }
                    Badge { tone: status_tone(claim.status), "{status_label(claim.status)}" }
                }
            }
            p { class: "claim-row-description", "{claim.description}" }
            div { class: "claim-row-meta",
                span { "{date}" }
                if show_customer {
                    span { "{claim.customer}" }
                }
                if let Some(agent) = &claim.agent {
                    span { "Agent: {agent}" }
                }
                span { class: "claim-row-amount", "{amount}" }
            }
        }
    }
}
