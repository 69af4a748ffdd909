//! Top navigation bar with wallet login and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads `SessionContext`, `Explorer`, `Avatars` and `UiConfig` from
//! context. Logged out, it shows a Login button that opens the email modal.
//! Logged in, it shows the shortened account address linked to the
//! explorer, plus an avatar dropdown with the username and Logout.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::login_modal::LoginModal;
use crate::config::UiConfig;
use crate::state::navbar::{NavbarState, submit_login, submit_logout};
use crate::state::session::{SessionContext, SessionState};
use crate::util::address::{AddressError, truncate_address_with};
use crate::util::avatar::Avatars;
use crate::util::explorer::Explorer;

/// Explorer link for the logged-in account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountLink {
    pub href: String,
    pub label: String,
}

/// Build the shortened, explorer-linked address shown in the navbar.
///
/// Returns `Ok(None)` for an empty address: there is nothing to link to.
///
/// # Errors
///
/// Returns [`AddressError`] if `address` is non-empty and malformed.
pub fn account_link(
    explorer: &Explorer,
    config: &UiConfig,
    address: &str,
) -> Result<Option<AccountLink>, AddressError> {
    if address.is_empty() {
        return Ok(None);
    }
    let label = truncate_address_with(address, config.address_prefix_len, config.address_suffix_len)?;
    Ok(Some(AccountLink {
        href: explorer.address_url(address),
        label,
    }))
}

/// Application navbar.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = expect_context::<UiConfig>();
    let state = session.state();
    let ui = RwSignal::new(NavbarState::default());

    let login_session = session.clone();
    let on_login = Callback::new(move |()| {
        leptos::task::spawn_local(submit_login(login_session.clone(), ui));
    });
    let on_logout = Callback::new(move |()| {
        leptos::task::spawn_local(submit_logout(session.clone(), ui));
    });
    let on_open = move |_: leptos::ev::MouseEvent| ui.update(NavbarState::open_modal);

    let is_logged_in = move || state.with(SessionState::is_logged_in);

    let brand = match config.logo_src.clone() {
        Some(src) => view! { <img class="navbar__logo" src=src alt=config.brand_name.clone()/> }.into_any(),
        None => view! { <span class="navbar__title">{config.brand_name.clone()}</span> }.into_any(),
    };

    view! {
        <nav class="navbar">
            <div class="navbar__brand">{brand}</div>

            <NavbarError ui=ui/>

            <Show
                when=is_logged_in
                fallback=move || {
                    view! {
                        <button
                            class="btn btn--primary navbar__login"
                            on:click=on_open
                            disabled=move || ui.with(NavbarState::login_disabled)
                        >
                            "Login"
                        </button>
                    }
                }
            >
                <AccountMenu ui=ui on_logout=on_logout/>
            </Show>

            <LoginModal ui=ui on_submit=on_login/>
        </nav>
    }
}

/// Last login/logout failure with a dismiss button; empty when there is none.
#[component]
fn NavbarError(ui: RwSignal<NavbarState>) -> impl IntoView {
    let error = move || ui.with(|s| s.error.clone());

    view! {
        <Show when=move || error().is_some()>
            <span class="navbar__error" role="alert">
                {move || error().unwrap_or_default()}
                <button
                    class="navbar__error-dismiss"
                    on:click=move |_| ui.update(NavbarState::clear_error)
                    title="Dismiss"
                >
                    "×"
                </button>
            </span>
        </Show>
    }
}

/// Address link, avatar and dropdown for a logged-in session.
#[component]
fn AccountMenu(ui: RwSignal<NavbarState>, on_logout: Callback<()>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let avatars = expect_context::<Avatars>();
    let state = session.state();

    let avatar_src = move || state.with(|s| avatars.generate(s.avatar_seed()));
    let username = move || state.with(|s| s.username().unwrap_or_default().to_owned());
    let busy = move || ui.with(NavbarState::logout_disabled);

    view! {
        <div class="navbar__account">
            <AddressLink class="navbar__address navbar__address--wide"/>
            <div class="dropdown dropdown-end">
                <img class="navbar__avatar" src=avatar_src alt="Account avatar" tabindex="0"/>
                <ul class="dropdown-content navbar__menu">
                    <li>
                        <span class="navbar__username">{username}</span>
                    </li>
                    <li>
                        <AddressLink class="navbar__address navbar__address--narrow"/>
                    </li>
                    <li>
                        <button
                            class="btn btn--danger navbar__logout"
                            on:click=move |_| on_logout.run(())
                            disabled=busy
                        >
                            {move || if busy() { "Logging out…" } else { "Logout" }}
                        </button>
                    </li>
                </ul>
            </div>
        </div>
    }
}

/// Shortened account address linking to the explorer.
///
/// A malformed address renders a muted label instead of a link.
#[component]
fn AddressLink(class: &'static str) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let explorer = expect_context::<Explorer>();
    let config = expect_context::<UiConfig>();
    let state = session.state();

    let link = move || {
        state.with(|s| {
            s.sca_address()
                .map(|address| account_link(&explorer, &config, address))
        })
    };

    move || match link() {
        Some(Ok(Some(link))) => view! {
            <a class=class href=link.href target="_blank" rel="noopener noreferrer">
                {link.label}
            </a>
        }
        .into_any(),
        Some(Err(err)) => {
            log::warn!("navbar: cannot render account address: {err}");
            view! {
                <span class=format!("{class} navbar__address--invalid") title=err.to_string()>
                    "invalid address"
                </span>
            }
            .into_any()
        }
        Some(Ok(None)) | None => ().into_any(),
    }
}
