//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its own fetch-on-mount and error state and delegates
//! presentation details to `components`. Requests run under a `ViewScope` so
//! a page that has been navigated away from ignores late responses.

pub mod admin;
pub mod home;
pub mod login;
pub mod register;
pub mod test_list;
pub mod test_view;
