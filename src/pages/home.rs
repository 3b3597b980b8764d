//! Landing page rendered at `/`.

use leptos::prelude::*;

/// Index page shown under the navigation shell.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Welcome"</h1>
            <p>"Pick a theme with the switcher, or head to your profile."</p>
        </section>
    }
}
