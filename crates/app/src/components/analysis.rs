use crate::format_helpers::{format_percent, next_action_tone, priority_tone, risk_tone};
use dioxus::prelude::*;
use shared_types::ClaimAnalysis;
use shared_ui::{Badge, Card};

/// One-line screening result: next action, risk and fraud score.
#[component]
pub fn AnalysisSummary(analysis: ClaimAnalysis) -> Element {
    rsx! {
        div { class: "analysis-summary",
            Badge { tone: next_action_tone(analysis.next_action), "{analysis.next_action.display_name()}" }
            span { "Risk: {analysis.risk.level.display_name()}" }
            span { "Fraud score: {format_percent(analysis.fraud.probability)}" }
        }
    }
}

/// Full screening breakdown for a single claim.
#[component]
pub fn AnalysisPanel(analysis: ClaimAnalysis) -> Element {
    let risk = &analysis.risk;
    let fraud = &analysis.fraud;

    rsx! {
        Card {
            title: "Claim Analysis",
            description: "Automated screening, {format_percent(analysis.confidence)} confidence",
            actions: rsx! {
                Badge { tone: next_action_tone(analysis.next_action), "{analysis.next_action.display_name()}" }
            },
            dl { class: "analysis-facts",
                dt { "Processing priority" }
                dd {
                    Badge { tone: priority_tone(analysis.processing_priority),
                        "{analysis.processing_priority.display_name()}"
                    }
                }
                dt { "Risk" }
                dd {
                    Badge { tone: risk_tone(risk.level), "{risk.level.display_name()}" }
                    " {format_percent(risk.score)} · approval likelihood {format_percent(risk.approval_probability)}"
                }
                dt { "Fraud screen" }
                dd { "{format_percent(fraud.probability)} · {fraud.recommendation.display_name()}" }
            }

            if !risk.factors.is_empty() || !fraud.indicators.is_empty() {
                h4 { class: "analysis-heading", "Flags" }
                ul { class: "analysis-list",
                    for flag in risk.factors.iter().chain(fraud.indicators.iter()) {
                        li { key: "{flag}", "{flag}" }
                    }
                }
            }

            h4 { class: "analysis-heading", "Required documents" }
            ul { class: "analysis-list",
                for doc in analysis.required_documents.iter() {
                    li { key: "{doc}", "{doc}" }
                }
            }

            h4 { class: "analysis-heading", "Recommendations" }
            ul { class: "analysis-list",
                for rec in analysis.recommendations.iter() {
                    li { key: "{rec}", "{rec}" }
                }
            }
        }
    }
}
