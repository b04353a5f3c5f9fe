//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `auth`, `toast`, `test_form`) so
//! pages depend on small focused models. Everything here is plain data plus
//! functions; Leptos signals wrap these types at the edges.

pub mod auth;
pub mod session;
pub mod test_form;
pub mod toast;
