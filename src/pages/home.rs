//! Public landing page listing published tests.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::test_card::TestCard;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::Test;
use crate::state::toast::ToastState;
use crate::util::scope::{spawn_scoped, use_view_scope};

/// Surface a failed listing as a toast as well as inline.
fn report_load_error(toasts: &mut ToastState, error: &ApiError) {
    log::warn!("fetching published tests failed: {error}");
    toasts.error("Error fetching published tests", error);
}

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let scope = use_view_scope();

    let tests = RwSignal::new(Vec::<Test>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let api = ApiClient::browser(&config);
    spawn_scoped(&scope, async move { api.published_tests().await }, move |result| {
        match result {
            Ok(items) => tests.set(items),
            Err(e) => {
                toasts.update(|t| report_load_error(t, &e));
                error.set(Some(e.user_message()));
            }
        }
        loading.set(false);
    });

    view! {
        <section class="home-page">
            <h2>"Welcome to LLM Test App"</h2>
            <p class="home-page__intro">
                "This application allows you to create, run, and publish tests for Language Models (LLMs). "
                "Explore published tests below or log in to create your own!"
            </p>
            <h3>"Published Tests"</h3>
            <Show when=move || error.get().is_some()>
                <p class="page-error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page-status">"Loading..."</p> }>
                <Show
                    when=move || !tests.get().is_empty()
                    fallback=|| view! { <p>"No published tests available at the moment."</p> }
                >
                    <div class="home-page__grid">
                        {move || {
                            tests
                                .get()
                                .into_iter()
                                .map(|t| view! { <TestCard id=t.id title=t.title description=t.description/> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </section>
    }
}
