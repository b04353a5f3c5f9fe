//! Role gate wrapped around restricted routes.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::util::auth::use_auth;
use crate::util::guard::{AppRoute, GuardDecision, guard_decision};

/// Render `children` when the current identity may open `route`, a loading
/// placeholder while identity is unresolved, and a redirect home otherwise.
#[component]
pub fn Guarded(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    move || match guard_decision(route, &auth.state()) {
        GuardDecision::Pending => view! { <p class="page-status">"Loading..."</p> }.into_any(),
        GuardDecision::Allow => children().into_any(),
        GuardDecision::Redirect => view! { <Redirect path=AppRoute::Home.path()/> }.into_any(),
    }
}
