//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::checkin::CheckInPage;
use crate::state::{drag::DragState, form::FormState, submission::SubmissionState};
use crate::util::emoji::EmojiMap;

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
/// Provides the check-in state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ClientConfig::from_document());
    provide_context(RwSignal::new(FormState::default()));
    provide_context(RwSignal::new(DragState::default()));
    // Empty until the page loads the remote table or falls back.
    provide_context(RwSignal::new(EmojiMap::default()));
    provide_context(RwSignal::new(SubmissionState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/mindguard.css"/>
        <Title text="MindGuard Check-In"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CheckInPage/>
            </Routes>
        </Router>
    }
}
