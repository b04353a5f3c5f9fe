//! Admin dashboard: list users and change their roles.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use std::collections::HashMap;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::{Role, UserSummary};
use crate::state::toast::ToastState;
use crate::util::auth::use_auth;
use crate::util::scope::{spawn_scoped, use_view_scope};

/// Role shown in a row's select: the pending draft if any, else the current role.
fn selected_role(user: &UserSummary, drafts: &HashMap<String, Role>) -> Option<Role> {
    drafts.get(&user.id).copied().or_else(|| Role::parse(&user.role))
}

fn role_updated_message(role: Role) -> String {
    format!("User role updated to {role}")
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let auth = use_auth();
    let scope = use_view_scope();

    let users = RwSignal::new(Vec::<UserSummary>::new());
    let drafts = RwSignal::new(HashMap::<String, Role>::new());
    let loading = RwSignal::new(true);

    let load_config = config.clone();
    let load_scope = scope.clone();
    let reload = Callback::new(move |()| {
        let api = ApiClient::browser(&load_config);
        let token = auth.token();
        spawn_scoped(&load_scope, async move { api.list_users(token.as_deref()).await }, move |result| {
            loading.set(false);
            match result {
                Ok(items) => {
                    users.set(items);
                    drafts.set(HashMap::new());
                }
                Err(e) => {
                    auth.expire_if_unauthorized(&e);
                    toasts.update(|t| {
                        t.error("Error fetching users", &e);
                    });
                }
            }
        });
    });
    reload.run(());

    let submit_role = Callback::new(move |user: UserSummary| {
        let Some(role) = selected_role(&user, &drafts.get_untracked()) else {
            return;
        };
        let api = ApiClient::browser(&config);
        let token = auth.token();
        let user_id = user.id;
        spawn_scoped(
            &scope,
            async move { api.update_role(token.as_deref(), &user_id, role).await },
            move |result| match result {
                Ok(_) => {
                    toasts.update(|t| {
                        t.success("Role updated", Some(role_updated_message(role)));
                    });
                    reload.run(());
                }
                Err(e) => {
                    auth.expire_if_unauthorized(&e);
                    toasts.update(|t| {
                        t.error("Error updating role", &e);
                    });
                }
            },
        );
    });

    view! {
        <section class="admin-page">
            <h2>"Admin Dashboard"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Loading..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Username"</th>
                            <th>"Email"</th>
                            <th>"Current Role"</th>
                            <th>"Change Role"</th>
                            <th>"Action"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            users
                                .get()
                                .into_iter()
                                .map(|user| {
                                    let select_user = user.clone();
                                    let draft_id = user.id.clone();
                                    let submit_user = user.clone();
                                    let current = move || {
                                        selected_role(&select_user, &drafts.get()).map_or("", Role::as_str)
                                    };
                                    view! {
                                        <tr>
                                            <td>{user.username}</td>
                                            <td>{user.email}</td>
                                            <td>{user.role}</td>
                                            <td>
                                                <select
                                                    class="data-table__select"
                                                    prop:value=current
                                                    on:change=move |ev| {
                                                        if let Some(role) = Role::parse(&event_target_value(&ev)) {
                                                            drafts.update(|d| {
                                                                d.insert(draft_id.clone(), role);
                                                            });
                                                        }
                                                    }
                                                >
                                                    {Role::ALL
                                                        .into_iter()
                                                        .map(|role| {
                                                            view! { <option value=role.as_str()>{role.as_str()}</option> }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </select>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn--primary"
                                                    on:click=move |_| submit_role.run(submit_user.clone())
                                                >
                                                    "Update Role"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </Show>
        </section>
    }
}
