//! Route table and role policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Both the router (`app`) and the navigation bar consult [`can_access`], so
//! a screen is linked exactly when it can be opened. The check runs at render
//! time; the backend still enforces its own authorization.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::auth::{AuthState, Identity};

/// Every screen of the app.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    Login,
    Register,
    Admin,
    TestList,
    CreateTest,
    TestDetail,
}

impl AppRoute {
    pub const ALL: [AppRoute; 7] = [
        AppRoute::Home,
        AppRoute::Login,
        AppRoute::Register,
        AppRoute::Admin,
        AppRoute::TestList,
        AppRoute::CreateTest,
        AppRoute::TestDetail,
    ];

    /// Router path; `TestDetail` carries an `:id` parameter.
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Admin => "/admin",
            Self::TestList => "/tests",
            Self::CreateTest => "/create-test",
            Self::TestDetail => "/test/:id",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Admin => "Admin Dashboard",
            Self::TestList => "Test List",
            Self::CreateTest => "Create Test",
            Self::TestDetail => "Test",
        }
    }

    /// Roles allowed to open this route; `None` means public.
    pub fn required_roles(self) -> Option<&'static [Role]> {
        const MANAGERS: &[Role] = &[Role::Admin, Role::Creator];
        match self {
            Self::Home | Self::Login | Self::Register | Self::TestDetail => None,
            Self::Admin | Self::TestList | Self::CreateTest => Some(MANAGERS),
        }
    }
}

pub fn test_detail_href(test_id: &str) -> String {
    format!("/test/{test_id}")
}

/// Pure access decision for a resolved identity.
pub fn can_access(route: AppRoute, identity: &Identity) -> bool {
    match route.required_roles() {
        None => true,
        Some(roles) => identity.authenticated && identity.role.is_some_and(|r| roles.contains(&r)),
    }
}

/// What the router should render for a route right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Identity lookup still running; show a placeholder.
    Pending,
    Allow,
    /// Denied; redirect to home.
    Redirect,
}

pub fn guard_decision(route: AppRoute, state: &AuthState) -> GuardDecision {
    if route.required_roles().is_none() {
        return GuardDecision::Allow;
    }
    if state.is_loading() {
        return GuardDecision::Pending;
    }
    if can_access(route, &state.identity) {
        GuardDecision::Allow
    } else {
        GuardDecision::Redirect
    }
}

/// Links shown in the navigation bar, in display order.
pub fn visible_nav_links(identity: &Identity) -> Vec<AppRoute> {
    let mut links = vec![AppRoute::Home];
    if !identity.authenticated {
        links.extend([AppRoute::Register, AppRoute::Login]);
        return links;
    }
    links.extend(
        [AppRoute::Admin, AppRoute::TestList, AppRoute::CreateTest]
            .into_iter()
            .filter(|route| can_access(*route, identity)),
    );
    links
}
