//! Full-screen loading indicator.

use leptos::prelude::*;

/// Centered spinner with a caller-supplied message.
#[component]
pub fn Loader(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="loader">
            <span class="loader__spinner" aria-hidden="true"></span>
            <h1 class="loader__message">{message}</h1>
        </div>
    }
}
