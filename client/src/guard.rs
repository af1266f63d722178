//! Route guard: the auth/route reconciliation state machine.
//!
//! DESIGN
//! ======
//! One pure transition function decides what the current navigation target
//! may do, and one effect applies its redirects. Every auth or location
//! change re-runs the same entry point, so protected views are never shown
//! to an unauthenticated session and the login view is never shown to an
//! authenticated one.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::shell::Shell;
use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
/// The overview route, where authenticated visitors land by default.
pub const DEFAULT_PROTECTED_PATH: &str = "/";

/// The three phases of the auth lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthPhase {
    /// Persisted session not read yet.
    Checking,
    Unauthenticated,
    Authenticated,
}

impl AuthPhase {
    /// Derive the phase from the shared auth state.
    #[must_use]
    pub fn of(state: &AuthState) -> Self {
        if state.loading {
            Self::Checking
        } else if state.logged_in {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

/// What the current route is allowed to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Neutral loading indicator; no content, no redirect.
    Loading,
    /// Render the requested view.
    Render,
    /// Render nothing and navigate to the target.
    Redirect(&'static str),
}

/// Whether a pathname addresses the login view.
#[must_use]
pub fn is_login_path(path: &str) -> bool {
    path.trim_end_matches('/') == LOGIN_PATH
}

/// The single reconciliation entry point.
#[must_use]
pub fn reconcile(phase: AuthPhase, on_login_route: bool) -> RouteDecision {
    match (phase, on_login_route) {
        (AuthPhase::Checking, _) => RouteDecision::Loading,
        (AuthPhase::Unauthenticated, false) => RouteDecision::Redirect(LOGIN_PATH),
        (AuthPhase::Unauthenticated, true) | (AuthPhase::Authenticated, false) => RouteDecision::Render,
        (AuthPhase::Authenticated, true) => RouteDecision::Redirect(DEFAULT_PROTECTED_PATH),
    }
}

/// Reactive decision for the current auth state and location.
fn use_route_decision() -> Memo<RouteDecision> {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    Memo::new(move |_| reconcile(AuthPhase::of(&auth.get()), is_login_path(&pathname.get())))
}

/// Apply redirect decisions as navigations.
fn install_redirect(decision: Memo<RouteDecision>) {
    let navigate = use_navigate();
    Effect::new(move || {
        if let RouteDecision::Redirect(target) = decision.get() {
            navigate(target, NavigateOptions::default());
        }
    });
}

fn fallback_view(message: &'static str) -> AnyView {
    view! {
        <div class="guard-fallback">
            <p>{message}</p>
        </div>
    }
    .into_any()
}

/// Guard for protected routes: renders the page inside the standard shell
/// once authenticated, a neutral indicator otherwise.
#[component]
pub fn Protected(page: fn() -> AnyView) -> impl IntoView {
    let decision = use_route_decision();
    install_redirect(decision);

    move || match decision.get() {
        RouteDecision::Render => view! { <Shell>{page()}</Shell> }.into_any(),
        RouteDecision::Loading => fallback_view("Loading..."),
        RouteDecision::Redirect(_) => fallback_view("Redirecting..."),
    }
}

/// Guard for the login route: renders the login view bare while
/// unauthenticated and redirects authenticated visitors to the overview.
#[component]
pub fn LoginGate(page: fn() -> AnyView) -> impl IntoView {
    let decision = use_route_decision();
    install_redirect(decision);

    move || match decision.get() {
        RouteDecision::Render => page(),
        RouteDecision::Loading => fallback_view("Loading..."),
        RouteDecision::Redirect(_) => fallback_view("Redirecting..."),
    }
}
