//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server issues no token: login returns the user document and this
//! store alone records "logged in" durably, in two storage keys — the JSON
//! session blob and a literal `"true"` marker. Route guards and
//! user-aware components react to the in-memory [`AuthState`] hydrated from
//! those keys once at startup.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::rc::Rc;

use send_wrapper::SendWrapper;

use dto::users::SessionUser;

use crate::storage::Storage;

/// Storage key holding the JSON-encoded session user.
pub const USER_KEY: &str = "bambly_user";
/// Storage key holding the logged-in marker.
pub const LOGGED_IN_KEY: &str = "bambly_logged_in";
/// The exact marker value; any other stored value reads as logged out.
pub const LOGGED_IN_MARKER: &str = "true";

/// Authentication state tracking the current user and loading status.
///
/// Invariant: `logged_in == user.is_some()`. Constructed only through the
/// helpers below, which keep that invariant by shape.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub logged_in: bool,
    pub loading: bool,
}

impl Default for AuthState {
    /// Startup state: nothing known yet, persisted session not read.
    fn default() -> Self {
        Self { user: None, logged_in: false, loading: true }
    }
}

impl AuthState {
    /// Settled state with no session.
    #[must_use]
    pub fn logged_out() -> Self {
        Self { user: None, logged_in: false, loading: false }
    }

    /// Settled state with an authenticated user.
    #[must_use]
    pub fn logged_in(user: SessionUser) -> Self {
        Self { user: Some(user), logged_in: true, loading: false }
    }
}

/// Persisted-session store over a storage capability.
///
/// Constructed once at the application root and shared via context, so
/// tests can instantiate isolated stores over an in-memory backend.
#[derive(Clone)]
pub struct SessionStore {
    // `SendWrapper` keeps the `Rc`-based store `Send + Sync` so it can be
    // handed to Leptos `provide_context`; the client runs single-threaded on
    // WASM, so the wrapper is never accessed across threads.
    backend: SendWrapper<Rc<dyn Storage>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(backend: Rc<dyn Storage>) -> Self {
        Self { backend: SendWrapper::new(backend) }
    }

    /// Read the persisted session once at startup.
    ///
    /// Only a present blob together with the exact marker value counts as
    /// logged in; an absent or mismatched marker and a corrupt blob all
    /// settle to logged out. Never fails, and the returned state always has
    /// `loading == false`.
    #[must_use]
    pub fn initialize(&self) -> AuthState {
        let marker = self.backend.get(LOGGED_IN_KEY);
        if marker.as_deref() != Some(LOGGED_IN_MARKER) {
            return AuthState::logged_out();
        }

        let Some(blob) = self.backend.get(USER_KEY) else {
            return AuthState::logged_out();
        };

        match serde_json::from_str::<SessionUser>(&blob) {
            Ok(user) => AuthState::logged_in(user),
            Err(_) => AuthState::logged_out(),
        }
    }

    /// Persist a successful login and return the new state. Idempotent:
    /// logging in twice with the same user leaves identical persisted state.
    /// No network I/O happens here; the HTTP login call is separate.
    #[must_use]
    pub fn login(&self, user: SessionUser) -> AuthState {
        if let Ok(blob) = serde_json::to_string(&user) {
            self.backend.set(USER_KEY, &blob);
            self.backend.set(LOGGED_IN_KEY, LOGGED_IN_MARKER);
        }
        AuthState::logged_in(user)
    }

    /// Clear the persisted session and return the logged-out state.
    /// Navigation back to the login view is the route guard's job.
    #[must_use]
    pub fn logout(&self) -> AuthState {
        self.backend.remove(USER_KEY);
        self.backend.remove(LOGGED_IN_KEY);
        AuthState::logged_out()
    }
}
