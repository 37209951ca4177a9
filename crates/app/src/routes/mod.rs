pub mod admin;
pub mod agent;
pub mod claims;
pub mod home;
pub mod login;
pub mod not_found;
pub mod policies;
pub mod profile;
pub mod register;
pub mod shells;

use crate::session::use_session;
use dioxus::prelude::*;
use shared_types::LayoutShell;
use shared_ui::LoadingSpinner;

use admin::AdminDashboard;
use agent::AgentDashboard;
use claims::{ClaimDetail, ClaimList, NewClaim};
use home::CustomerHome;
use login::Login;
use not_found::NotFound;
use policies::{PolicyDetail, PolicyList};
use profile::Profile;
use register::Register;
use shells::{AdminShell, AgentShell, CustomerShell};

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::CustomerHome {})]
    #[redirect("/dashboard", || Route::CustomerHome {})]
    #[route("/auth/login")]
    Login {},
    #[route("/auth/register")]
    Register {},

    #[layout(DashboardLayout)]
        #[route("/dashboard/home")]
        CustomerHome {},
        #[route("/dashboard/admin")]
        AdminDashboard {},
        #[route("/dashboard/agent")]
        AgentDashboard {},
        #[route("/dashboard/claims")]
        ClaimList {},
        #[route("/dashboard/claims/new")]
        NewClaim {},
        #[route("/dashboard/claims/:id")]
        ClaimDetail { id: String },
        #[route("/dashboard/policies")]
        PolicyList {},
        #[route("/dashboard/policies/:id")]
        PolicyDetail { id: String },
        #[route("/dashboard/profile")]
        Profile {},
    #[end_layout]

    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Dashboard layout: resolves the session, then wraps the page in the
/// shell of the signed-in role.
///
/// Uses `use_server_future` with `?` so SSR suspends until the session
/// lookup completes. While the lookup is pending no shell is chosen.
#[component]
fn DashboardLayout() -> Element {
    let mut session = use_session();
    let route: Route = use_route();

    let resource = use_server_future(move || async move { server::api::get_current_user().await })?;

    // Only the first answer settles the status; later sign-in and sign-out
    // transitions come from the pages themselves.
    if session.is_loading() {
        match resource.read().as_ref().cloned() {
            Some(Ok(user)) => session.resolve(user),
            Some(Err(e)) => {
                tracing::warn!(error = %e, "session lookup failed");
                session.resolve(None);
            }
            None => {}
        }
    }

    if session.is_loading() {
        return rsx! {
            div { class: "page-loading",
                LoadingSpinner { message: "Loading..." }
            }
        };
    }

    let Some(user) = session.current_user() else {
        navigator().replace(Route::Login {});
        return rsx! {
            div { class: "page-loading",
                LoadingSpinner { message: "Redirecting to login..." }
            }
        };
    };

    let path = route.to_string();
    match LayoutShell::for_role(user.role) {
        LayoutShell::Admin => rsx! {
            AdminShell { user, path, Outlet::<Route> {} }
        },
        LayoutShell::Agent => rsx! {
            AgentShell { user, path, Outlet::<Route> {} }
        },
        LayoutShell::Customer => rsx! {
            CustomerShell { user, path, Outlet::<Route> {} }
        },
    }
}
