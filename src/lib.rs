//! # evalboard
//!
//! Leptos + WASM client for creating, running, listing, and viewing LLM
//! evaluation tests served by an external REST backend.
//!
//! This crate contains pages, components, application state, the typed REST
//! client, and the auth gate (session store, identity resolver, route guard)
//! that decides which screens a visitor may open.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod test_support;
