//! Root application component and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};

use crate::components::navbar::Navbar;
use crate::config::UiConfig;
use crate::state::session::{SessionBackend, SessionContext, SessionState};
use crate::util::avatar::Avatars;
use crate::util::explorer::Explorer;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(
    options: LeptosOptions,
    backend: Arc<dyn SessionBackend>,
    config: UiConfig,
    explorer: Explorer,
) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App backend config explorer/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the wallet session, avatar provider, config and explorer to all
/// descendants, renders the navbar and places `children` below it.
#[component]
pub fn App(
    backend: Arc<dyn SessionBackend>,
    config: UiConfig,
    explorer: Explorer,
    #[prop(optional)] initial_session: SessionState,
    #[prop(optional)] avatars: Option<Avatars>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    provide_meta_context();

    let title = config.brand_name.clone();
    provide_context(SessionContext::new(backend, initial_session));
    provide_context(avatars.unwrap_or_default());
    provide_context(config);
    provide_context(explorer);

    view! {
        <Title text=title/>
        <Navbar/>
        <main class="app__main">{children.map(|children| children())}</main>
    }
}
