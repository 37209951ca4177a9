use crate::components::AnalysisPanel;
use crate::format_helpers::{format_date_human, format_inr, priority_tone, status_label, status_tone};
use crate::routes::Route;
use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::{find_claim, require_role, AppError, AppErrorKind, ALL_ROLES};
use shared_ui::{Badge, Card, EmptyState, LoadingSpinner, PageHeader};

/// One claim with its screening result.
#[component]
pub fn ClaimDetail(id: String) -> Element {
    let session = use_session();
    let lookup = require_role(session.role(), ALL_ROLES).and_then(|role| find_claim(role, &id));

    let analysis_id = id.clone();
    let analysis = use_resource(move || {
        let claim_id = analysis_id.clone();
        async move { server::api::analyze_claim(claim_id).await }
    });

    let claim = match lookup {
        Ok(claim) => claim,
        Err(err) => return rsx! { ClaimMissing { error: err } },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./claims.css") }

        div { class: "claims-page",
            PageHeader {
                title: "{claim.claim_number}",
                subtitle: "{claim.claim_type.display_name()} claim",
                Badge { tone: status_tone(claim.status), "{status_label(claim.status)}" }
            }

            Card { title: "Details", description: "{claim.description}",
                dl { class: "receipt-facts",
                    dt { "Amount" }
                    dd { "{format_inr(claim.amount)}" }
                    dt { "Priority" }
                    dd {
                        Badge { tone: priority_tone(claim.priority), "{claim.priority.display_name()}" }
                    }
                    dt { "Incident date" }
                    dd { {format_date_human(&claim.incident_date)} }
                    dt { "Submitted" }
                    dd { {format_date_human(&claim.submitted_date)} }
                    dt { "Customer" }
                    dd { "{claim.customer}" }
                    if let Some(agent) = &claim.agent {
                        dt { "Agent" }
                        dd { "{agent}" }
                    }
                }
            }

            {match &*analysis.read() {
                Some(Ok(result)) => rsx! { AnalysisPanel { analysis: result.clone() } },
                Some(Err(e)) => rsx! {
                    Card { title: "Claim Analysis",
                        p { class: "receipt-note", {AppError::friendly_message(&e.to_string())} }
                    }
                },
                None => rsx! { LoadingSpinner { message: "Analysing claim..." } },
            }}

            Link { class: "card-link", to: Route::ClaimList {}, "← All claims" }
        }
    }
}

#[component]
fn ClaimMissing(error: AppError) -> Element {
    let title = match error.kind {
        AppErrorKind::Unauthorized => "Sign in required",
        _ => "Claim not found",
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./claims.css") }
        div { class: "claims-page",
            EmptyState {
                title: "{title}",
                message: "{error.message}",
                Link { class: "button-link", to: Route::ClaimList {}, "Back to claims" }
            }
        }
    }
}
