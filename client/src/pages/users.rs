//! Team page: user listing and account management.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use dto::users::{NewUser, Role, UserRecord, UserUpdate};
use leptos::prelude::*;

use crate::components::demo_notice::DemoDataNotice;

/// Form validation applied before an account is submitted.
pub(crate) fn validate_new_user_input(name: &str, email: &str, password: &str) -> Result<NewUser, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Name, email and password are all required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    Ok(NewUser {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        role: None,
        phone: None,
        department: None,
    })
}

/// Roles offered in the add-user form.
pub(crate) const ROLE_OPTIONS: [Role; 3] = [Role::Admin, Role::Manager, Role::Viewer];

#[component]
pub fn UsersPage() -> impl IntoView {
    let users = RwSignal::new(Vec::<UserRecord>::new());
    let demo_data = RwSignal::new(false);
    let message = RwSignal::new(String::new());
    let reload = RwSignal::new(0_u32);

    // Add-user form state.
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Viewer.as_str().to_owned());

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        // Re-runs after every mutation bump.
        let _generation = reload.get();
        leptos::task::spawn_local(async move {
            use crate::net::api::{Api, fetched_or_keep};
            let mut demo = false;
            if let Some(data) = fetched_or_keep(Api::new().users().await, &mut demo) {
                users.set(data);
            }
            demo_data.set(demo);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = reload;
        demo_data.set(true);
    }

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut new_user = match validate_new_user_input(&name.get(), &email.get(), &password.get()) {
            Ok(user) => user,
            Err(validation_message) => {
                message.set(validation_message.to_owned());
                return;
            }
        };
        new_user.role = match role.get().as_str() {
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            _ => Some(Role::Viewer),
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::Api::new().create_user(&new_user).await {
                Ok(result) => {
                    message.set(result.message);
                    name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    reload.update(|generation| *generation += 1);
                }
                Err(e) => message.set(e.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = new_user;
        }
    };

    let on_toggle_active = move |user: UserRecord| {
        let update = UserUpdate { active: Some(!user.active), ..UserUpdate::default() };
        let id = user.id.to_string();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::Api::new().update_user(&id, &update).await {
                Ok(result) => {
                    message.set(result.message);
                    reload.update(|generation| *generation += 1);
                }
                Err(e) => message.set(e.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, update);
        }
    };

    let on_delete = move |user: UserRecord| {
        let id = user.id.to_string();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::Api::new().delete_user(&id).await {
                Ok(result) => {
                    message.set(result.message);
                    reload.update(|generation| *generation += 1);
                }
                Err(e) => message.set(e.to_string()),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    view! {
        <section class="page page--users">
            <h1>"Team"</h1>
            <DemoDataNotice visible=Signal::derive(move || demo_data.get())/>

            <Show when=move || !message.get().is_empty()>
                <p class="page__message">{move || message.get()}</p>
            </Show>

            <div class="panel">
                <h2>"Add User"</h2>
                <form class="user-form" on:submit=on_add>
                    <input
                        class="user-form__input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <input
                        class="user-form__input"
                        type="email"
                        placeholder="email@bambly.ai"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="user-form__input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <select
                        class="user-form__input"
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        {ROLE_OPTIONS
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option value=option.as_str() selected={option == Role::Viewer}>
                                        {option.as_str()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                    <button class="btn btn--primary" type="submit">
                        "Add"
                    </button>
                </form>
            </div>

            <div class="panel">
                <h2>"Accounts"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Department"</th>
                            <th>"Status"</th>
                            <th>"Last Login"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let toggle_user = user.clone();
                                    let delete_user = user.clone();
                                    view! {
                                        <tr>
                                            <td>{user.name.clone()}</td>
                                            <td>{user.email.clone()}</td>
                                            <td>
                                                <span class=format!("badge badge--{}", user.role.as_str())>
                                                    {user.role.as_str()}
                                                </span>
                                            </td>
                                            <td>{user.department.clone().unwrap_or_else(|| "—".to_owned())}</td>
                                            <td>{if user.active { "active" } else { "deactivated" }}</td>
                                            <td>{user.last_login.clone().unwrap_or_else(|| "never".to_owned())}</td>
                                            <td class="data-table__actions">
                                                <button
                                                    class="btn"
                                                    on:click=move |_| on_toggle_active(toggle_user.clone())
                                                >
                                                    {if user.active { "Deactivate" } else { "Activate" }}
                                                </button>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |_| on_delete(delete_user.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </div>
        </section>
    }
}
