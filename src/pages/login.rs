//! Login page: username + password exchanged for a bearer token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::state::auth;
use crate::state::toast::ToastState;
use crate::util::auth::use_auth;
use crate::util::scope::{spawn_scoped, use_view_scope};

fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let auth_ctx = use_auth();
    let scope = use_view_scope();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user, pass) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let api = ApiClient::browser(&config);
        let session = auth_ctx.session();
        let navigate = navigate.clone();
        spawn_scoped(
            &scope,
            async move { auth::login(&session, &api, &user, &pass).await },
            move |result| {
                busy.set(false);
                match result {
                    Ok(()) => {
                        toasts.update(|t| {
                            t.success("Login successful", Some("You've successfully logged in.".to_owned()));
                        });
                        auth_ctx.refresh();
                        navigate("/", NavigateOptions::default());
                    }
                    Err(e) => {
                        toasts.update(|t| {
                            t.error("Login failed", &e);
                        });
                    }
                }
            },
        );
    };

    view! {
        <section class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Login"</h2>
                <label class="auth-form__label">
                    "Username"
                    <input
                        class="auth-form__input"
                        type="text"
                        required
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        required
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Login"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-form__message">{move || info.get()}</p>
                </Show>
            </form>
        </section>
    }
}
