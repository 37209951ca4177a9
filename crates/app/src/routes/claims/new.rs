use crate::components::AnalysisPanel;
use crate::format_helpers::{format_date_human, format_inr};
use crate::latency::sleep_ms;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{
    AppError, ClaimAnalysis, ClaimFacts, ClaimPriority, ClaimReceipt, ClaimType, ClientConfig,
    NewClaimForm, NewClaimRequest,
    ALL_CLAIM_TYPES, ALL_PRIORITIES,
};
use shared_ui::{Alert, BadgeTone, Button, ButtonVariant, Card, FieldShell, FormField, PageHeader};

const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit claim. Please try again.";
const RECEIPT_VISIBLE_MS: u64 = 2500;

/// Package the request for submission and issue its receipt.
fn submit_claim(request: &NewClaimRequest) -> Result<ClaimReceipt, AppError> {
    let payload =
        serde_json::to_string(request).map_err(|e| AppError::internal(e.to_string()))?;
    let issued = ClaimReceipt::issue(chrono::Utc::now(), uuid::Uuid::new_v4());
    tracing::info!(
        claim_number = %issued.claim_number,
        claim_type = request.claim_type.as_str(),
        payload_bytes = payload.len(),
        "claim submitted"
    );
    Ok(issued)
}

/// Claim intake form. Submission is simulated and yields a receipt.
#[component]
pub fn NewClaim() -> Element {
    let config: ClientConfig = use_context();
    let mut form = use_signal(NewClaimForm::default);
    let mut error = use_signal(|| Option::<AppError>::None);
    let mut submit_error = use_signal(|| Option::<String>::None);
    let mut receipt = use_signal(|| Option::<(ClaimReceipt, ClaimAnalysis)>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| async move {
        evt.prevent_default();
        error.set(None);
        submit_error.set(None);

        let today = chrono::Local::now().date_naive();
        let request = match form.read().check(today) {
            Ok(request) => request,
            Err(e) => {
                error.set(Some(e));
                return;
            }
        };

        loading.set(true);
        sleep_ms(config.simulation.submit_delay_ms).await;

        let issued = match submit_claim(&request) {
            Ok(issued) => issued,
            Err(e) => {
                tracing::warn!(error = %e, "claim submission failed");
                submit_error.set(Some(SUBMIT_FAILED_MESSAGE.to_string()));
                loading.set(false);
                return;
            }
        };
        let analysis = ClaimAnalysis::of(&ClaimFacts::from(&request));
        receipt.set(Some((issued, analysis)));
        loading.set(false);

        sleep_ms(RECEIPT_VISIBLE_MS).await;
        navigator().push(Route::ClaimList {});
    };

    let field_error = move |name: &str| {
        error
            .read()
            .as_ref()
            .and_then(|e| e.field_errors.get(name).cloned())
    };

    if let Some((done, analysis)) = receipt() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./claims.css") }
            div { class: "claims-page",
                Card { class: "claim-receipt",
                    title: "Claim submitted",
                    description: "We'll email you as soon as an agent picks it up.",
                    dl { class: "receipt-facts",
                        dt { "Claim number" }
                        dd { class: "receipt-number", "{done.claim_number}" }
                        dt { "Submitted" }
                        dd { {format_date_human(&done.submitted_at.to_rfc3339())} }
                    }
                    p { class: "receipt-note", "Taking you to your claims..." }
                }
                AnalysisPanel { analysis }
            }
        };
    }

    let current = form();
    let amount_preview = current
        .amount
        .replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a > 0.0)
        .map(format_inr);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./claims.css") }

        div { class: "claims-page",
            PageHeader {
                title: "Submit New Claim",
                subtitle: "Please provide detailed information about your claim to help us process it quickly and accurately.",
            }

            Card { title: "Claim Information",
                form { class: "claim-form", onsubmit: handle_submit,
                    if let Some(msg) = submit_error() {
                        Alert { tone: BadgeTone::Danger, "{msg}" }
                    }

                    div { class: "claim-form-row",
                        FieldShell { label: "Claim Type", name: "claim_type", required: true,
                            select {
                                id: "claim_type",
                                class: "form-input",
                                onchange: move |evt: FormEvent| {
                                    form.write().claim_type = ClaimType::from_str_or_default(&evt.value());
                                },
                                for kind in ALL_CLAIM_TYPES.iter() {
                                    option {
                                        key: "{kind.as_str()}",
                                        value: kind.as_str(),
                                        selected: *kind == current.claim_type,
                                        "{kind.display_name()}"
                                    }
                                }
                            }
                        }
                        FieldShell { label: "Priority", name: "priority",
                            select {
                                id: "priority",
                                class: "form-input",
                                onchange: move |evt: FormEvent| {
                                    form.write().priority = ClaimPriority::from_str_or_default(&evt.value());
                                },
                                for level in ALL_PRIORITIES.iter() {
                                    option {
                                        key: "{level.as_str()}",
                                        value: level.as_str(),
                                        selected: *level == current.priority,
                                        "{level.display_name()}"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "claim-form-row",
                        FormField {
                            label: "Incident Date",
                            name: "incident_date",
                            input_type: "date",
                            required: true,
                            value: current.incident_date.clone(),
                            error: field_error("incident_date"),
                            on_input: move |v: String| form.write().incident_date = v,
                        }
                        FormField {
                            label: "Estimated Claim Amount (₹)",
                            name: "amount",
                            input_type: "text",
                            placeholder: "e.g. 50,000",
                            required: true,
                            value: current.amount.clone(),
                            error: field_error("amount"),
                            on_input: move |v: String| form.write().amount = v,
                        }
                    }
                    if let Some(preview) = amount_preview {
                        p { class: "claim-amount-preview", "Claiming {preview}" }
                    }

                    FieldShell {
                        label: "Description",
                        name: "description",
                        required: true,
                        error: field_error("description"),
                        textarea {
                            id: "description",
                            class: "form-input",
                            rows: 5,
                            placeholder: "Describe what happened, where and when",
                            value: current.description.clone(),
                            oninput: move |evt: FormEvent| form.write().description = evt.value(),
                        }
                    }

                    div { class: "claim-form-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| { navigator().push(Route::ClaimList {}); },
                            "Cancel"
                        }
                        Button {
                            button_type: "submit",
                            loading: loading(),
                            loading_text: "Submitting...",
                            "Submit Claim"
                        }
                    }
                }
            }
        }
    }
}
