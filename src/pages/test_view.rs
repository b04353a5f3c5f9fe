//! Single test detail: inputs, per-model results, accuracy chart, publish.

#[cfg(test)]
#[path = "test_view_test.rs"]
mod test_view_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::results_chart::ResultsChart;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Test, TestResult};
use crate::state::auth::Identity;
use crate::state::toast::ToastState;
use crate::util::auth::use_auth;
use crate::util::scope::{spawn_scoped, use_view_scope};
use crate::util::time::format_optional;

#[derive(Clone, Debug, PartialEq, Eq)]
enum DetailState {
    Loading,
    NotFound,
    Failed(String),
    Ready(Box<Test>),
}

fn detail_state(result: Result<Test, ApiError>) -> DetailState {
    match result {
        Ok(test) => DetailState::Ready(Box::new(test)),
        Err(ApiError::Validation { status: 404, .. }) => DetailState::NotFound,
        Err(e) => DetailState::Failed(e.user_message()),
    }
}

/// Surface a failed load as a toast as well as inline.
fn report_load_error(toasts: &mut ToastState, error: &ApiError) {
    log::warn!("fetching test failed: {error}");
    toasts.error("Error fetching test data", error);
}

fn can_publish(identity: &Identity, test: &Test) -> bool {
    identity.authenticated && !test.published
}

/// Fold a publish response into the displayed test. A body that did not
/// decode as a test still marks the local copy published.
fn mark_published(test: &mut Test, returned: Option<Test>) {
    if let Some(updated) = returned {
        *test = updated;
    }
    test.published = true;
}

fn verdict_mark(result: &TestResult) -> &'static str {
    if result.passed() { "✓" } else { "✗" }
}

#[component]
pub fn TestViewPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let auth = use_auth();
    let scope = use_view_scope();
    let params = use_params_map();

    let state = RwSignal::new(DetailState::Loading);
    let publishing = RwSignal::new(false);
    let test_id = move || params.with(|p| p.get("id")).unwrap_or_default();

    let load_config = config.clone();
    let load_scope = scope.clone();
    Effect::new(move |_| {
        let id = test_id();
        state.set(DetailState::Loading);
        let api = ApiClient::browser(&load_config);
        spawn_scoped(&load_scope, async move { api.fetch_test(&id).await }, move |result| {
            if let Err(e) = &result {
                toasts.update(|t| report_load_error(t, e));
            }
            state.set(detail_state(result));
        });
    });

    let publish = Callback::new(move |()| {
        if publishing.get_untracked() {
            return;
        }
        publishing.set(true);
        let api = ApiClient::browser(&config);
        let token = auth.token();
        let id = test_id();
        spawn_scoped(
            &scope,
            async move { api.publish_test(token.as_deref(), &id).await },
            move |result| {
                publishing.set(false);
                match result {
                    Ok(returned) => {
                        state.update(|s| {
                            if let DetailState::Ready(test) = s {
                                mark_published(test, returned);
                            }
                        });
                        toasts.update(|t| {
                            t.success("Test published successfully", None);
                        });
                    }
                    Err(e) => {
                        auth.expire_if_unauthorized(&e);
                        toasts.update(|t| {
                            t.error("Error publishing test", &e);
                        });
                    }
                }
            },
        );
    });

    view! {
        <section class="test-view-page">
            {move || match state.get() {
                DetailState::Loading => view! { <p class="page-status">"Loading..."</p> }.into_any(),
                DetailState::NotFound => view! { <p class="page-status">"Test not found"</p> }.into_any(),
                DetailState::Failed(message) => view! { <p class="page-error">{message}</p> }.into_any(),
                DetailState::Ready(test) => {
                    let show_publish = can_publish(&auth.identity(), &test);
                    let test = *test;
                    view! {
                        <h2>{test.title}</h2>
                        <dl class="test-view__details">
                            <dt>"Description"</dt>
                            <dd>{test.description}</dd>
                            <dt>"User Message"</dt>
                            <dd>{test.user_message}</dd>
                            <dt>"Review Message"</dt>
                            <dd>{test.review_message}</dd>
                            <dt>"Number of Requests"</dt>
                            <dd>{test.num_requests}</dd>
                            <dt>"Published"</dt>
                            <dd>{if test.published { "Yes" } else { "No" }}</dd>
                            <dt>"Created At"</dt>
                            <dd>{format_optional(test.created_at.as_deref())}</dd>
                            <dt>"Updated At"</dt>
                            <dd>{format_optional(test.updated_at.as_deref())}</dd>
                        </dl>
                        <h3>"Anthropic Models Tested"</h3>
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"Model"</th>
                                    <th>"Result"</th>
                                    <th>"Response"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {test
                                    .results
                                    .iter()
                                    .map(|result| {
                                        let mark = verdict_mark(result);
                                        let class = if result.passed() {
                                            "test-view__verdict test-view__verdict--pass"
                                        } else {
                                            "test-view__verdict test-view__verdict--fail"
                                        };
                                        view! {
                                            <tr>
                                                <td>{result.model.clone()}</td>
                                                <td class=class>{mark}</td>
                                                <td class="test-view__response">{result.response.clone()}</td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                        <ResultsChart results=test.results/>
                        <Show when=move || show_publish>
                            <button
                                class="btn btn--primary"
                                disabled=move || publishing.get()
                                on:click=move |_| publish.run(())
                            >
                                "Publish Test Results"
                            </button>
                        </Show>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
