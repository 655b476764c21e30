//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Layout components (`public_shell`, `auth_layout`) frame pages; the rest are
//! building blocks those layouts and the pages share.

pub mod auth_gate;
pub mod auth_layout;
pub mod loading_indicator;
pub mod logo;
pub mod page_header;
pub mod public_shell;
pub mod site_footer;
pub mod site_nav;
