//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing rules and browser/environment concerns
//! from page and component logic.

pub mod auth;
pub mod calendar;
