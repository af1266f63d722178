use super::*;
use dto::users::{Role, SessionUser};
use uuid::Uuid;

fn sample_user() -> SessionUser {
    SessionUser {
        id: Uuid::nil(),
        name: "Admin User".to_owned(),
        email: "admin@bambly.ai".to_owned(),
        role: Role::Admin,
        department: None,
        avatar: None,
        last_login: None,
    }
}

#[test]
fn phase_derivation_covers_all_three_states() {
    assert_eq!(AuthPhase::of(&AuthState::default()), AuthPhase::Checking);
    assert_eq!(AuthPhase::of(&AuthState::logged_out()), AuthPhase::Unauthenticated);
    assert_eq!(AuthPhase::of(&AuthState::logged_in(sample_user())), AuthPhase::Authenticated);
}

#[test]
fn checking_renders_loading_everywhere() {
    assert_eq!(reconcile(AuthPhase::Checking, false), RouteDecision::Loading);
    assert_eq!(reconcile(AuthPhase::Checking, true), RouteDecision::Loading);
}

#[test]
fn unauthenticated_off_login_redirects_to_login() {
    assert_eq!(
        reconcile(AuthPhase::Unauthenticated, false),
        RouteDecision::Redirect(LOGIN_PATH)
    );
}

#[test]
fn unauthenticated_on_login_renders_the_login_view() {
    assert_eq!(reconcile(AuthPhase::Unauthenticated, true), RouteDecision::Render);
}

#[test]
fn authenticated_on_login_redirects_to_the_overview() {
    assert_eq!(
        reconcile(AuthPhase::Authenticated, true),
        RouteDecision::Redirect(DEFAULT_PROTECTED_PATH)
    );
}

#[test]
fn authenticated_off_login_renders_the_route() {
    assert_eq!(reconcile(AuthPhase::Authenticated, false), RouteDecision::Render);
}

#[test]
fn login_path_matching_tolerates_trailing_slash() {
    assert!(is_login_path("/login"));
    assert!(is_login_path("/login/"));
    assert!(!is_login_path("/"));
    assert!(!is_login_path("/fraud"));
    assert!(!is_login_path("/login/extra"));
}

#[test]
fn a_full_session_walks_checking_then_unauth_then_auth() {
    // Startup on a protected path: show loading, never redirect early.
    assert_eq!(reconcile(AuthPhase::of(&AuthState::default()), false), RouteDecision::Loading);

    // Hydration found no session: bounce to the login view.
    let settled = AuthState::logged_out();
    assert_eq!(
        reconcile(AuthPhase::of(&settled), false),
        RouteDecision::Redirect(LOGIN_PATH)
    );
    // After the redirect settles the login view renders.
    assert_eq!(reconcile(AuthPhase::of(&settled), true), RouteDecision::Render);

    // Successful login while sitting on /login: bounce to the overview.
    let authed = AuthState::logged_in(sample_user());
    assert_eq!(
        reconcile(AuthPhase::of(&authed), true),
        RouteDecision::Redirect(DEFAULT_PROTECTED_PATH)
    );
    assert_eq!(reconcile(AuthPhase::of(&authed), false), RouteDecision::Render);
}
