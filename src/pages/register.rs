//! Registration page. New accounts start as Viewers.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::types::RegisterRequest;
use crate::state::toast::ToastState;
use crate::util::scope::{spawn_scoped, use_view_scope};

fn validate_register_input(username: &str, email: &str, password: &str) -> Result<RegisterRequest, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Username, email, and password are required.");
    }
    let valid_email = email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
    if !valid_email {
        return Err("Enter a valid email address.");
    }
    Ok(RegisterRequest {
        username: username.to_owned(),
        email: email.to_owned(),
        hashed_password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let scope = use_view_scope();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&username.get(), &email.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let api = ApiClient::browser(&config);
        spawn_scoped(&scope, async move { api.register(&request).await }, move |result| {
            busy.set(false);
            match result {
                Ok(()) => {
                    toasts.update(|t| {
                        t.success(
                            "Registration successful",
                            Some("You've successfully registered as a Viewer.".to_owned()),
                        );
                    });
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    info.set("Account created. You can log in now.".to_owned());
                }
                Err(e) => {
                    toasts.update(|t| {
                        t.error("Registration failed", &e);
                    });
                }
            }
        });
    };

    view! {
        <section class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Register"</h2>
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
                    "Email"
                    <input
                        class="auth-form__input"
                        type="email"
                        required
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        required
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Register"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-form__message">{move || info.get()}</p>
                </Show>
                <p class="auth-form__hint">
                    "Already registered? "
                    <a href="/login">"Log in"</a>
                </p>
            </form>
        </section>
    }
}
