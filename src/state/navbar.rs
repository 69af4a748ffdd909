//! Login modal and session-action state for the navbar.
//!
//! DESIGN
//! ======
//! [`NavbarState`] is owned by one navbar instance. It covers the phases
//! `LoggedOut -> ModalOpen -> LoggingIn -> (LoggedOut | LoggedIn)` and
//! `LoggedIn -> LoggingOut -> (LoggedOut | LoggedIn)`; whether the user is
//! logged in comes from [`SessionState`], everything else lives here.
//!
//! A login attempt always closes the modal and clears the email when it
//! resolves, success or not. Failures are kept in `error` so the navbar can
//! show them. Re-entry while a request is in flight is refused, which is
//! also why the triggering buttons are disabled.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use super::session::{SessionContext, SessionError, SessionState};

/// Navbar phase derived from local and session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarPhase {
    LoggedOut,
    ModalOpen,
    LoggingIn,
    LoggedIn,
    LoggingOut,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavbarState {
    /// Login modal visible.
    pub modal_open: bool,
    /// `login` has been called and not yet resolved.
    pub login_in_flight: bool,
    /// `logout` has been called and not yet resolved.
    pub logging_out: bool,
    /// Email typed into the modal.
    pub email: String,
    /// Last login/logout failure, cleared when the modal reopens.
    pub error: Option<String>,
}

impl NavbarState {
    pub fn phase(&self, session: &SessionState) -> NavbarPhase {
        if session.is_logged_in() {
            if self.logging_out {
                NavbarPhase::LoggingOut
            } else {
                NavbarPhase::LoggedIn
            }
        } else if self.login_in_flight {
            NavbarPhase::LoggingIn
        } else if self.modal_open {
            NavbarPhase::ModalOpen
        } else {
            NavbarPhase::LoggedOut
        }
    }

    pub fn open_modal(&mut self) {
        self.modal_open = true;
        self.error = None;
    }

    /// Close without logging in. Ignored while a login is in flight.
    pub fn close_modal(&mut self) {
        if self.login_in_flight {
            return;
        }
        self.modal_open = false;
        self.email.clear();
    }

    pub fn set_email(&mut self, value: String) {
        self.email = value;
    }

    /// Start a login attempt, returning the email to submit.
    ///
    /// Returns `None` if the modal is closed or a login is already running.
    pub fn begin_login(&mut self) -> Option<String> {
        if !self.modal_open || self.login_in_flight {
            return None;
        }
        self.login_in_flight = true;
        Some(self.email.clone())
    }

    pub fn finish_login(&mut self, outcome: Result<(), SessionError>) {
        self.login_in_flight = false;
        self.modal_open = false;
        self.email.clear();
        self.error = outcome.err().map(|err| err.to_string());
    }

    /// Start a logout, returning `false` if one is already running.
    pub fn begin_logout(&mut self) -> bool {
        if self.logging_out {
            return false;
        }
        self.logging_out = true;
        self.error = None;
        true
    }

    pub fn finish_logout(&mut self, outcome: Result<(), SessionError>) {
        self.logging_out = false;
        self.error = outcome.err().map(|err| err.to_string());
    }

    pub fn login_disabled(&self) -> bool {
        self.login_in_flight
    }

    pub fn logout_disabled(&self) -> bool {
        self.logging_out
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Run the login flow for the navbar owning `ui`.
///
/// Results that arrive after `ui` is disposed (navbar unmounted) are dropped.
pub async fn submit_login(session: SessionContext, ui: RwSignal<NavbarState>) {
    let Some(Some(email)) = ui.try_update(NavbarState::begin_login) else {
        return;
    };
    log::debug!("navbar: login requested");

    let outcome = session.login(email).await;
    if let Err(err) = &outcome {
        log::warn!("navbar: login failed: {err}");
    }
    if ui.try_update(|state| state.finish_login(outcome)).is_none() {
        log::debug!("navbar: unmounted before login resolved");
    }
}

/// Run the logout flow for the navbar owning `ui`.
pub async fn submit_logout(session: SessionContext, ui: RwSignal<NavbarState>) {
    if ui.try_update(NavbarState::begin_logout) != Some(true) {
        return;
    }
    log::debug!("navbar: logout requested");

    let outcome = session.logout().await;
    if let Err(err) = &outcome {
        log::warn!("navbar: logout failed: {err}");
    }
    if ui.try_update(|state| state.finish_logout(outcome)).is_none() {
        log::debug!("navbar: unmounted before logout resolved");
    }
}
