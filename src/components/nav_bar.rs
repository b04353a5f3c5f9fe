//! Top navigation links and the logout button.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::toast::ToastState;
use crate::util::auth::use_auth;
use crate::util::guard::visible_nav_links;

/// Navigation derived from the role policy; shows Logout when signed in.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = use_auth();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.logout();
        toasts.update(|t| {
            t.success("Logged out", None);
        });
        navigate("/", NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            {move || {
                visible_nav_links(&auth.identity())
                    .into_iter()
                    .map(|route| {
                        view! {
                            <a class="nav-bar__link" href=route.path()>
                                {route.label()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            <Show when=move || auth.identity().authenticated>
                <button class="btn nav-bar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
