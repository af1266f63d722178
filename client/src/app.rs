//! Root application component with routing and context providers.
//!
//! DESIGN
//! ======
//! The session store and the auth signal are constructed here — not as
//! ambient singletons — and handed down via context, so tests can build
//! isolated instances over an in-memory storage backend.

use leptos::prelude::*;
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::guard::{LoginGate, Protected};
use crate::pages::audience::AudiencePage;
use crate::pages::campaigns::CampaignsPage;
use crate::pages::fraud::FraudPage;
use crate::pages::geo::GeoPage;
use crate::pages::insights::InsightsPage;
use crate::pages::login::LoginPage;
use crate::pages::overview::OverviewPage;
use crate::pages::settings::SettingsPage;
use crate::pages::users::UsersPage;
use crate::state::auth::{AuthState, SessionStore};
use crate::storage::default_backend;

/// Root application component.
///
/// Provides the auth context and sets up client-side routing; every route
/// renders through the guard.
#[component]
pub fn App() -> impl IntoView {
    let session = SessionStore::new(default_backend());
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_context(session.clone());

    // Read the persisted session exactly once at startup; `loading` is
    // false from here on, whatever the outcome.
    let hydrate_session = session.clone();
    Effect::new(move || {
        if auth.get_untracked().loading {
            auth.set(hydrate_session.initialize());
        }
    });

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <LoginGate page=|| LoginPage().into_any()/> }
                />
                <Route
                    path=StaticSegment("")
                    view=|| view! { <Protected page=|| OverviewPage().into_any()/> }
                />
                <Route
                    path=StaticSegment("campaigns")
                    view=|| view! { <Protected page=|| CampaignsPage().into_any()/> }
                />
                <Route
                    path=StaticSegment("audience")
                    view=|| view! { <Protected page=|| AudiencePage().into_any()/> }
                />
                <Route
                    path=StaticSegment("fraud")
                    view=|| view! { <Protected page=|| FraudPage().into_any()/> }
                />
                <Route
                    path=StaticSegment("insights")
                    view=|| view! { <Protected page=|| InsightsPage().into_any()/> }
                />
                <Route
                    path=StaticSegment("geo")
                    view=|| view! { <Protected page=|| GeoPage().into_any()/> }
                />
                <Route
                    path=StaticSegment("users")
                    view=|| view! { <Protected page=|| UsersPage().into_any()/> }
                />
                <Route
                    path=StaticSegment("settings")
                    view=|| view! { <Protected page=|| SettingsPage().into_any()/> }
                />
            </Routes>
        </Router>
    }
}
