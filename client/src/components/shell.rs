//! Application chrome: sidebar navigation plus the identity header.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::{AuthState, SessionStore};

/// Route table rendered in the sidebar.
const NAV_ITEMS: [(&str, &str); 8] = [
    ("/", "Overview"),
    ("/campaigns", "Campaigns"),
    ("/audience", "Audience"),
    ("/fraud", "Fraud Watch"),
    ("/insights", "Insights"),
    ("/geo", "Geo Targeting"),
    ("/users", "Team"),
    ("/settings", "Settings"),
];

/// Standard chrome around every protected route.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="shell">
            <Sidebar/>
            <div class="shell__body">
                <Header/>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    view! {
        <nav class="sidebar">
            <div class="sidebar__brand">
                <span class="sidebar__name">"Bambly"</span>
                <span class="sidebar__tagline">"Marketing Intelligence"</span>
            </div>
            <ul class="sidebar__nav">
                {NAV_ITEMS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <li class="sidebar__item">
                                <A href=href>{label}</A>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </nav>
    }
}

#[component]
fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let session = expect_context::<SessionStore>();

    let identity = move || {
        auth.get()
            .user
            .map(|user| (user.name, user.role.as_str()))
            .unwrap_or_else(|| ("—".to_owned(), "viewer"))
    };

    // Clearing auth state is enough: the route guard reconciles on the
    // change and navigates back to the login view.
    let on_logout = move |_| {
        auth.set(session.logout());
    };

    view! {
        <header class="header">
            <span class="header__spacer"></span>
            <span class="header__user">
                {move || identity().0}
                " ("
                <span class="header__role">{move || identity().1}</span>
                ")"
            </span>
            <button class="btn header__logout" on:click=on_logout title="Logout">
                "Logout"
            </button>
        </header>
    }
}
