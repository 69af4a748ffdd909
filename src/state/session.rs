//! Wallet session state and the capability used to change it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The wallet itself (key management, signing, RPC) lives outside this crate
//! behind [`SessionBackend`]. The app shell wraps a backend in a
//! [`SessionContext`] and provides it via Leptos context; components read
//! the reactive [`SessionState`] and call `login`/`logout` on the context.
//!
//! ERROR HANDLING
//! ==============
//! Backend failures come back as [`SessionError`] and leave the current
//! state untouched. Completions that arrive after the owning reactive scope
//! was disposed are dropped.

#[cfg(test)]
#[path = "session_test.rs"]
pub(crate) mod session_test;

use std::sync::Arc;

use futures::FutureExt as _;
use futures::future::LocalBoxFuture;
use leptos::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The wallet refused the request (bad identifier, user cancelled, ...).
    #[error("login rejected: {0}")]
    Rejected(String),
    /// The wallet could not be reached.
    #[error("wallet unavailable: {0}")]
    Unavailable(String),
}

/// The logged-in account. Username and address are always present together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Account {
    pub username: String,
    /// Smart-contract-account address, `0x` + 40 hex digits when well formed.
    pub sca_address: String,
}

/// Read-only view of the wallet session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    account: Option<Account>,
}

impl SessionState {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn logged_in(username: impl Into<String>, sca_address: impl Into<String>) -> Self {
        Self {
            account: Some(Account {
                username: username.into(),
                sca_address: sca_address.into(),
            }),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.account.is_some()
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn username(&self) -> Option<&str> {
        self.account.as_ref().map(|a| a.username.as_str())
    }

    pub fn sca_address(&self) -> Option<&str> {
        self.account.as_ref().map(|a| a.sca_address.as_str())
    }

    /// Seed for the account avatar: the username, falling back to the address.
    pub fn avatar_seed(&self) -> &str {
        match &self.account {
            Some(account) if !account.username.is_empty() => &account.username,
            Some(account) => &account.sca_address,
            None => "",
        }
    }
}

/// External wallet operations. Returned futures must not borrow the backend.
pub trait SessionBackend: Send + Sync {
    /// Authenticate `identifier` (an email address) and return the new session.
    fn login(&self, identifier: String) -> LocalBoxFuture<'static, Result<SessionState, SessionError>>;

    /// End the current session.
    fn logout(&self) -> LocalBoxFuture<'static, Result<(), SessionError>>;
}

/// Reactive session handle provided to components via context.
#[derive(Clone)]
pub struct SessionContext {
    state: RwSignal<SessionState>,
    backend: Arc<dyn SessionBackend>,
}

impl SessionContext {
    /// Create the context. Must be called inside the owning reactive scope.
    pub fn new(backend: Arc<dyn SessionBackend>, initial: SessionState) -> Self {
        Self {
            state: RwSignal::new(initial),
            backend,
        }
    }

    /// Reactive read access to the session.
    pub fn state(&self) -> ReadSignal<SessionState> {
        self.state.read_only()
    }

    /// Log in with `identifier`; on success the session state is replaced.
    pub fn login(&self, identifier: String) -> LocalBoxFuture<'static, Result<(), SessionError>> {
        let state = self.state;
        let pending = self.backend.login(identifier);
        async move {
            let next = pending.await?;
            log::debug!("session: logged in (account present: {})", next.is_logged_in());
            if state.try_set(next).is_some() {
                log::debug!("session: context disposed before login resolved");
            }
            Ok(())
        }
        .boxed_local()
    }

    /// Log out; on success the session state becomes logged out.
    pub fn logout(&self) -> LocalBoxFuture<'static, Result<(), SessionError>> {
        let state = self.state;
        let pending = self.backend.logout();
        async move {
            pending.await?;
            log::debug!("session: logged out");
            if state.try_set(SessionState::logged_out()).is_some() {
                log::debug!("session: context disposed before logout resolved");
            }
            Ok(())
        }
        .boxed_local()
    }
}
