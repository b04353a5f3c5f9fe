//! Table of every test the signed-in creator or admin can see.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::Test;
use crate::state::toast::ToastState;
use crate::util::auth::use_auth;
use crate::util::guard::test_detail_href;
use crate::util::scope::{spawn_scoped, use_view_scope};
use crate::util::time::format_optional;

#[component]
pub fn TestListPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let auth = use_auth();
    let scope = use_view_scope();

    let tests = RwSignal::new(Vec::<Test>::new());
    let loading = RwSignal::new(true);

    let load_config = config.clone();
    let load_scope = scope.clone();
    let reload = Callback::new(move |()| {
        let api = ApiClient::browser(&load_config);
        let token = auth.token();
        spawn_scoped(&load_scope, async move { api.list_tests(token.as_deref()).await }, move |result| {
            loading.set(false);
            match result {
                Ok(items) => tests.set(items),
                Err(e) => {
                    log::warn!("fetching tests failed: {e}");
                    auth.expire_if_unauthorized(&e);
                    toasts.update(|t| {
                        t.error("Error fetching tests", &e);
                    });
                }
            }
        });
    });
    reload.run(());

    let delete_test = Callback::new(move |test_id: String| {
        let api = ApiClient::browser(&config);
        let token = auth.token();
        spawn_scoped(
            &scope,
            async move { api.delete_test(token.as_deref(), &test_id).await },
            move |result| match result {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success("Test deleted", None);
                    });
                    reload.run(());
                }
                Err(e) => {
                    auth.expire_if_unauthorized(&e);
                    toasts.update(|t| {
                        t.error("Error deleting test", &e);
                    });
                }
            },
        );
    });

    view! {
        <section class="test-list-page">
            <h2>"Test List"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Loading..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Title"</th>
                            <th>"Description"</th>
                            <th>"Created At"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            tests
                                .get()
                                .into_iter()
                                .map(|test| {
                                    let href = test_detail_href(&test.id);
                                    let created = format_optional(test.created_at.as_deref());
                                    let id = test.id;
                                    view! {
                                        <tr>
                                            <td>{test.title}</td>
                                            <td>{test.description}</td>
                                            <td>{created}</td>
                                            <td class="data-table__actions">
                                                <a class="btn btn--primary btn--small" href=href>
                                                    "View"
                                                </a>
                                                <button
                                                    class="btn btn--danger btn--small"
                                                    on:click=move |_| delete_test.run(id.clone())
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
                <Show when=move || tests.get().is_empty()>
                    <p class="page-status">"No tests yet."</p>
                </Show>
            </Show>
        </section>
    }
}
