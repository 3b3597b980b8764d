//! Root application component with routing and the theme context.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{A, Outlet, ParentRoute, Route, Router, Routes},
};

use crate::components::theme_switcher::ThemeSwitcher;
use crate::pages::{home::HomePage, profile::ProfilePage};
use crate::state::theme::ThemeController;
use crate::util::theme_dom::DocumentTheme;

/// Root application component.
///
/// Builds the theme controller from persisted state, provides it via
/// context, and sets up client-side routing: a navigation shell wrapping
/// the index and profile pages.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Single controller instance for the page session; constructing it
    // reads localStorage and applies the initial data-theme projection.
    let theme = RwSignal::new(ThemeController::initialize(DocumentTheme));
    provide_context(theme);

    view! {
        <Stylesheet id="theme-shell" href="/style.css"/>
        <Title text="theme-shell"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=RootLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}

/// Navigation shell wrapping every routed page.
#[component]
fn RootLayout() -> impl IntoView {
    view! {
        <nav class="nav">
            <A href="/" exact=true>"Home"</A>
            <A href="/profile">"My profile"</A>
            <ThemeSwitcher/>
        </nav>
        <main>
            <Outlet/>
        </main>
    }
}
