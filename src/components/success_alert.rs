//! Dismissible banner confirming a submitted transaction.
//!
//! The transaction hash is not validated; it is percent-encoded into the
//! explorer link by `Explorer::tx_url`.

#[cfg(test)]
#[path = "success_alert_test.rs"]
mod success_alert_test;

use leptos::prelude::*;

use crate::config::UiConfig;
use crate::state::alert::AlertState;
use crate::util::explorer::Explorer;

/// Success banner with a link to the transaction on the block explorer.
///
/// Once dismissed it renders nothing until the component is recreated.
#[component]
pub fn SuccessAlert(#[prop(into)] message: String, #[prop(into)] hash: String) -> impl IntoView {
    let alert = RwSignal::new(AlertState::default());
    view! { <AlertBanner alert message hash/> }
}

/// Banner body driven by an externally owned [`AlertState`].
#[component]
fn AlertBanner(alert: RwSignal<AlertState>, message: String, hash: String) -> impl IntoView {
    let explorer = expect_context::<Explorer>();
    let config = expect_context::<UiConfig>();

    let href = explorer.tx_url(&hash);
    let link_text = format!("Check out your transaction on {}", config.explorer_name);
    let on_dismiss = move |_: leptos::ev::MouseEvent| alert.update(AlertState::dismiss);

    view! {
        <Show when=move || alert.with(AlertState::is_visible)>
            <div class="alert alert--success" role="alert">
                <button class="alert__close" on:click=on_dismiss title="Dismiss">
                    "×"
                </button>
                <div class="alert__body">
                    <svg
                        class="alert__icon"
                        xmlns="http://www.w3.org/2000/svg"
                        viewBox="0 0 20 20"
                        aria-hidden="true"
                    >
                        <path d="M2.93 17.07A10 10 0 1 1 17.07 2.93 10 10 0 0 1 2.93 17.07zm12.73-1.41A8 8 0 1 0 4.34 4.34a8 8 0 0 0 11.32 11.32zM9 11V9h2v6H9v-4zm0-6h2v2H9V5z"></path>
                    </svg>
                    <span>
                        {message.clone()}
                        " "
                        <a href=href.clone() class="alert__link" target="_blank" rel="noopener noreferrer">
                            {link_text.clone()}
                        </a>
                        "."
                    </span>
                </div>
            </div>
        </Show>
    }
}
