use dioxus::prelude::*;
use shared_types::ClientConfig;

mod components;
pub mod format_helpers;
mod latency;
mod routes;
mod session;
mod storage;
use routes::Route;
use session::SessionContext;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        let config = server::config::load_config();

        if config.features.telemetry {
            server::telemetry::init_telemetry();
        }
        server::health::record_start_time();

        let store = server::session::SessionStore::new();

        // Background task: drop expired sessions every 15 minutes
        let cleanup_store = store.clone();
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(std::time::Duration::from_secs(15 * 60));
            loop {
                interval.tick().await;
                let pruned = cleanup_store.prune_expired();
                if pruned > 0 {
                    tracing::debug!(pruned, "expired sessions removed");
                }
            }
        });

        let mut router =
            dioxus::server::router(App).merge(server::health::health_router(store.clone()));

        if config.features.telemetry {
            router = router.layer(server::telemetry::OtelTraceLayer);
        }

        let router = router
            .layer(axum::middleware::from_fn_with_state(
                store,
                server::session::middleware::session_middleware,
            ))
            .layer(tower_http::trace::TraceLayer::new_for_http())
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Fetch client config once and provide via context (defaults on error)
    let config_resource =
        use_server_future(move || async move { server::api::get_client_config().await })?;

    let config = config_resource
        .read()
        .as_ref()
        .cloned()
        .unwrap_or(Ok(ClientConfig::default()))
        .unwrap_or_default();

    use_context_provider(|| config);
    use_context_provider(SessionContext::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "page-loading",
                    shared_ui::LoadingSpinner { message: "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
