//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are thin views: session data comes from `SessionContext` in
//! Leptos context and per-instance state lives in `crate::state`.

pub mod loader;
pub mod login_modal;
pub mod navbar;
pub mod success_alert;
