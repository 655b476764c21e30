//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in `RwSignal`s provided through Leptos context so components
//! observe changes reactively instead of polling.

pub mod session;
