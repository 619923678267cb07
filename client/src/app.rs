//! Root application component with routing and the session.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};

use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::auth::{SignalNavigator, app_session};

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
/// Creates the one session of the page, restores it from `localStorage`
/// once mounted, and hands it to each route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = app_session();
    Effect::new(move |_| {
        session.restore();
    });

    view! {
        <Title text="Workout Planner"/>

        <Router>
            <NavigationBridge navigator=*session.navigator()/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=move || view! { <LoginPage session=session/> }/>
                <Route path=StaticSegment("") view=move || view! { <HomePage session=session/> }/>
            </Routes>
        </Router>
    }
}

/// Performs navigations the session queued while outside the router.
#[component]
fn NavigationBridge(navigator: SignalNavigator) -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();
    Effect::new(move |_| {
        if navigator.pending().is_none() {
            return;
        }
        let Some(path) = navigator.take() else {
            return;
        };
        // Already there, e.g. the guard redirecting right after logout did.
        if location.pathname.with_untracked(|current| *current == path) {
            return;
        }
        navigate(&path, NavigateOptions::default());
    });
}
