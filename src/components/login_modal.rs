//! Email login modal opened from the navbar.

#[cfg(test)]
#[path = "login_modal_test.rs"]
mod login_modal_test;

use leptos::prelude::*;

use crate::state::navbar::NavbarState;

/// Modal asking for the email to log in with.
///
/// The identifier is passed to the wallet as typed; the form opts out of
/// browser validation so non-email identifiers still submit.
///
/// Close, Escape and a backdrop click discard the input. Submitting runs
/// `on_submit`; every control is disabled while a login is in flight.
#[component]
pub fn LoginModal(ui: RwSignal<NavbarState>, on_submit: Callback<()>) -> impl IntoView {
    let busy = move || ui.with(NavbarState::login_disabled);
    let on_close = move |_: leptos::ev::MouseEvent| ui.update(NavbarState::close_modal);
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            ui.update(NavbarState::close_modal);
        }
    };
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !busy() {
            on_submit.run(());
        }
    };

    view! {
        <Show when=move || ui.with(|s| s.modal_open)>
            <div class="dialog-backdrop" on:click=on_close>
                <form
                    class="dialog dialog--login"
                    novalidate=true
                    on:submit=on_form_submit
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                    tabindex="0"
                >
                    <h3>"Enter your email!"</h3>
                    <input
                        class="login-input"
                        type="text"
                        inputmode="email"
                        autocomplete="email"
                        placeholder="email"
                        prop:value=move || ui.with(|s| s.email.clone())
                        on:input=move |ev| ui.update(|s| s.set_email(event_target_value(&ev)))
                        disabled=busy
                    />
                    <div class="dialog__actions">
                        <button type="button" class="btn" on:click=on_close disabled=busy>
                            "Close"
                        </button>
                        <button type="submit" class="btn btn--primary" disabled=busy>
                            {move || if busy() { "Logging in…" } else { "Login" }}
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
