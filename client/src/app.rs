//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::workspace::WorkspacePage;
use crate::state::{data::DataState, rules::RulesState, suggestions::SuggestionsState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
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

    let data = RwSignal::new(DataState::default());
    let rules = RwSignal::new(RulesState::default());
    let suggestions = RwSignal::new(SuggestionsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(data);
    provide_context(rules);
    provide_context(suggestions);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/dataval.css"/>
        <Title text="Data Validation"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=WorkspacePage/>
            </Routes>
        </Router>
    }
}
