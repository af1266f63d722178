//! Demo-data banner shown when a background fetch failed.

use leptos::prelude::*;

/// Soft warning that the view is rendering bundled demo numbers because at
/// least one upstream fetch failed. Never blanks fields.
#[component]
pub fn DemoDataNotice(visible: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || visible.get()>
            <div class="demo-notice">
                <span class="demo-notice__badge">"Demo data"</span>
                <span>"Live metrics are unavailable; showing bundled demo values."</span>
            </div>
        </Show>
    }
}
