//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::API_URL_META;
use crate::pages::catalog::CatalogPage;
use crate::state::{catalog::CatalogState, form::FormState, toast::ToastState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_url` is advertised to the browser through a `<meta>` tag so the
/// hydrated client knows where the catalog REST server lives.
pub fn shell(options: LeptosOptions, api_url: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_URL_META content=api_url/>
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(CatalogState::default()));
    provide_context(RwSignal::new(FormState::default()));
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/catalog.css"/>
        <Title text="Product Catalog"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CatalogPage/>
            </Routes>
        </Router>
    }
}
