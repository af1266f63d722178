//! Settings page: branding, currency, cadence and integration status.

use dto::settings::{BrandingData, ConnectionStatus, SettingsData, SettingsUpdate};
use leptos::prelude::*;

use crate::components::demo_notice::DemoDataNotice;

fn default_settings() -> SettingsData {
    SettingsData {
        branding: BrandingData {
            dashboard_name: "Bambly".to_owned(),
            tagline: "Marketing Intelligence for Pakistan E-commerce".to_owned(),
            logo_url: "/logo.svg".to_owned(),
            primary_color: "#6366f1".to_owned(),
        },
        currency: "PKR".to_owned(),
        sync_interval: 60,
        data_retention: 90,
        connections: ["googleAds", "metaAds", "analytics", "clarity", "fraudShield"]
            .into_iter()
            .map(|platform| ConnectionStatus { platform: platform.to_owned(), connected: false })
            .collect(),
        updated_at: "—".to_owned(),
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = RwSignal::new(default_settings());
    let demo_data = RwSignal::new(false);
    let message = RwSignal::new(String::new());

    // Editable form fields, re-seeded whenever settings load.
    let dashboard_name = RwSignal::new(String::new());
    let tagline = RwSignal::new(String::new());
    let currency = RwSignal::new(String::new());
    let sync_interval = RwSignal::new(String::new());

    let seed_form = move |data: &SettingsData| {
        dashboard_name.set(data.branding.dashboard_name.clone());
        tagline.set(data.branding.tagline.clone());
        currency.set(data.currency.clone());
        sync_interval.set(data.sync_interval.to_string());
    };
    seed_form(&settings.get_untracked());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api::{Api, fetched_or_keep};

        let mut demo = false;
        if let Some(data) = fetched_or_keep(Api::new().settings().await, &mut demo) {
            seed_form(&data);
            settings.set(data);
        }
        demo_data.set(demo);
    });
    #[cfg(not(feature = "hydrate"))]
    demo_data.set(true);

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let current = settings.get();
        let update = SettingsUpdate {
            branding: Some(BrandingData {
                dashboard_name: dashboard_name.get().trim().to_owned(),
                tagline: tagline.get().trim().to_owned(),
                logo_url: current.branding.logo_url.clone(),
                primary_color: current.branding.primary_color,
            }),
            currency: Some(currency.get().trim().to_owned()),
            sync_interval: sync_interval.get().trim().parse().ok(),
            data_retention: None,
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::Api::new().update_settings(&update).await {
                Ok(ack) => message.set(ack.message),
                Err(e) => message.set(e.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
        }
    };

    view! {
        <section class="page page--settings">
            <h1>"Settings"</h1>
            <DemoDataNotice visible=Signal::derive(move || demo_data.get())/>

            <Show when=move || !message.get().is_empty()>
                <p class="page__message">{move || message.get()}</p>
            </Show>

            <div class="panel">
                <h2>"Workspace"</h2>
                <form class="settings-form" on:submit=on_save>
                    <label class="settings-form__label">
                        "Dashboard name"
                        <input
                            class="settings-form__input"
                            type="text"
                            prop:value=move || dashboard_name.get()
                            on:input=move |ev| dashboard_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="settings-form__label">
                        "Tagline"
                        <input
                            class="settings-form__input"
                            type="text"
                            prop:value=move || tagline.get()
                            on:input=move |ev| tagline.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="settings-form__label">
                        "Currency"
                        <input
                            class="settings-form__input"
                            type="text"
                            prop:value=move || currency.get()
                            on:input=move |ev| currency.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="settings-form__label">
                        "Sync interval (minutes)"
                        <input
                            class="settings-form__input"
                            type="number"
                            min="5"
                            prop:value=move || sync_interval.get()
                            on:input=move |ev| sync_interval.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Save"
                    </button>
                </form>
            </div>

            <div class="panel">
                <h2>"Integrations"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Platform"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            settings
                                .get()
                                .connections
                                .into_iter()
                                .map(|connection| {
                                    view! {
                                        <tr>
                                            <td>{connection.platform}</td>
                                            <td>{if connection.connected { "connected" } else { "not connected" }}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
                <p class="page__footnote">
                    {move || format!("Data retention: {} days", settings.get().data_retention)}
                </p>
            </div>
        </section>
    }
}
