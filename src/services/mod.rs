//! Auth domain services: session tokens and email access codes.

pub mod email_auth;
pub mod session;
