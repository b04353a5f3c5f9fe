//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` moves raw requests over HTTP, `api` builds and decodes every
//! endpoint call, `error` classifies failures, and `types` defines the wire
//! schema.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
