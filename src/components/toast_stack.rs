//! Notification stack rendered once at the root.
//!
//! Each toast schedules its own dismissal when first rendered; the close
//! button dismisses it early.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastState};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast toasts=toasts/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toasts: RwSignal<ToastState>) -> impl IntoView {
    let id = toast.id;

    #[cfg(feature = "csr")]
    {
        let duration = std::time::Duration::from_millis(u64::from(toast.duration_ms));
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(duration).await;
            toasts.try_update(|t| t.dismiss(id));
        });
    }

    let class = format!("toast {}", toast.kind.css_modifier());
    view! {
        <div class=class role="status">
            <div class="toast__body">
                <strong class="toast__title">{toast.title}</strong>
                {toast.description.map(|d| view! { <p class="toast__description">{d}</p> })}
            </div>
            <button class="toast__close" title="Dismiss" on:click=move |_| toasts.update(|t| t.dismiss(id))>
                "×"
            </button>
        </div>
    }
}
