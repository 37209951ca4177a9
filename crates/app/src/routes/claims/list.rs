use crate::components::ClaimRow;
use crate::format_helpers::claim_filter_label;
use crate::latency::sleep_ms;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_types::{claims_history, ClaimFilter, ClientConfig, CLAIM_FILTERS};
use shared_ui::{Card, EmptyState, PageHeader, Skeleton};

#[component]
pub fn ClaimList() -> Element {
    let config: ClientConfig = use_context();
    let mut filter = use_signal(ClaimFilter::default);

    let claims = use_resource(move || async move {
        sleep_ms(config.simulation.load_delay_ms).await;
        claims_history()
    });

    let body = match &*claims.read() {
        None => rsx! {
            div { class: "list-skeleton",
                for i in 0..3 {
                    Skeleton { key: "{i}", class: "skeleton-row" }
                }
            }
        },
        Some(all) => {
            let active = filter();
            let visible: Vec<_> = active.apply(all).into_iter().cloned().collect();
            rsx! {
                div { class: "filter-chips", role: "group", "aria-label": "Filter claims",
                    for option in CLAIM_FILTERS.iter().copied() {
                        button {
                            key: "{claim_filter_label(option)}",
                            r#type: "button",
                            class: "filter-chip",
                            "aria-pressed": active == option,
                            onclick: move |_| filter.set(option),
                            "{claim_filter_label(option)}"
                        }
                    }
                }

                if visible.is_empty() {
                    EmptyState {
                        title: "No claims found",
                        message: "You haven't submitted any claims yet, or none match this filter.",
                        Link { class: "button-link", to: Route::NewClaim {}, "Submit New Claim" }
                    }
                } else {
                    Card {
                        for claim in visible {
                            ClaimRow { key: "{claim.id}", claim: claim.clone() }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./claims.css") }

        div { class: "claims-page",
            PageHeader {
                title: "My Claims",
                subtitle: "Track the status of your insurance claims",
                Link { class: "button-link", to: Route::NewClaim {},
                    Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                    "New Claim"
                }
            }
            {body}
        }
    }
}
