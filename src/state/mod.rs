//! Application and component state.
//!
//! DESIGN
//! ======
//! `session` is the injected wallet-session capability shared by the whole
//! app. `navbar` and `alert` are per-instance component state kept as plain
//! structs so their transitions can be tested without a browser.

pub mod alert;
pub mod navbar;
pub mod session;
