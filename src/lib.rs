//! # wallet-ui
//!
//! Leptos components for a wallet-enabled web app: a navbar with email login
//! and logout, a full-screen loader and a dismissible transaction banner.
//!
//! The wallet itself is an external collaborator reached through
//! [`state::session::SessionBackend`]. Hosts build a [`config::UiConfig`],
//! then either render [`app::shell`] on the server or call [`mount`] in the
//! browser.

pub mod app;
pub mod components;
pub mod config;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
use std::sync::Arc;

#[cfg(feature = "hydrate")]
use crate::state::session::SessionBackend;

/// Hydrate the server-rendered body with [`app::App`].
///
/// Installs the panic hook and console logger, validates `config` and
/// mounts the app against `backend`.
///
/// # Errors
///
/// Returns [`config::ConfigError`] if the explorer URL is unusable.
#[cfg(feature = "hydrate")]
pub fn mount(backend: Arc<dyn SessionBackend>, config: config::UiConfig) -> Result<(), config::ConfigError> {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }

    let explorer = config.explorer()?;
    log::info!("mounting wallet ui (explorer {})", explorer.base());
    leptos::mount::hydrate_body(move || view! { <App backend config explorer/> });
    Ok(())
}
