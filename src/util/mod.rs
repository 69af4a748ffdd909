//! Pure helpers shared across wallet UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Formatting, link building and avatar generation stay free of reactive
//! state so components remain thin views and the rules stay unit-testable.

pub mod address;
pub mod avatar;
pub mod explorer;
