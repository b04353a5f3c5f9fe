//! Root application component with routing and context providers.
//!
//! The root owns the only writable auth state. It resolves the stored session
//! once on mount, exposes read-only access plus login/logout callbacks through
//! [`AuthContext`], and wires every route through the role guard.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{guarded::Guarded, nav_bar::NavBar, toast_stack::ToastStack};
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::pages::{
    admin::AdminPage, create_test::CreateTestPage, home::HomePage, login::LoginPage, register::RegisterPage,
    test_list::TestListPage, test_view::TestViewPage,
};
use crate::state::auth::{self, AuthState};
use crate::state::session::{LocalStorageSession, SessionStore};
use crate::state::toast::ToastState;
use crate::util::auth::AuthContext;
use crate::util::guard::AppRoute;
use crate::util::scope::{ViewScope, spawn_scoped};

/// Root application component.
///
/// Provides config, auth, and toast contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = LocalStorageSession::default();
    let auth_state = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());
    let root_scope = ViewScope::new();

    let resolve_config = config.clone();
    let refresh = Callback::new(move |()| {
        auth_state.update(AuthState::begin);
        let api = ApiClient::browser(&resolve_config);
        let token_used = session.get();
        spawn_scoped(
            &root_scope,
            async move { auth::resolve(&session, &api).await },
            move |identity| {
                auth_state.update(|s| {
                    auth::settle_if_current(&session, s, token_used.as_deref(), identity);
                });
            },
        );
    });
    let logout = Callback::new(move |()| auth_state.update(|s| auth::logout(&session, s)));
    let expire = Callback::new(move |error: ApiError| {
        auth_state.update(|s| {
            auth::expire_on_unauthorized(&session, s, &error);
        });
    });

    let auth_ctx = AuthContext::new(Signal::derive(move || auth_state.get()), session, refresh, logout, expire);

    provide_context(config);
    provide_context(auth_ctx);
    provide_context(toasts);

    refresh.run(());

    view! {
        <Title text="LLM Test App"/>

        <Router>
            <div class="app-shell">
                <header class="app-shell__header">
                    <h1 class="app-shell__title">"LLM Test App"</h1>
                    <NavBar/>
                </header>
                <main class="app-shell__main">
                    <Routes fallback=|| view! { <p class="page-status">"Page not found."</p> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route
                            path=StaticSegment("admin")
                            view=|| view! { <Guarded route=AppRoute::Admin><AdminPage/></Guarded> }
                        />
                        <Route
                            path=StaticSegment("tests")
                            view=|| view! { <Guarded route=AppRoute::TestList><TestListPage/></Guarded> }
                        />
                        <Route
                            path=StaticSegment("create-test")
                            view=|| view! { <Guarded route=AppRoute::CreateTest><CreateTestPage/></Guarded> }
                        />
                        <Route path=(StaticSegment("test"), ParamSegment("id")) view=TestViewPage/>
                    </Routes>
                </main>
            </div>
            <ToastStack/>
        </Router>
    }
}
