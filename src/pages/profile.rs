//! Profile page rendered at `/profile`.

use leptos::prelude::*;

/// Profile page placeholder.
#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <section class="profile-page">
            <h1>"My profile"</h1>
            <p>"Nothing here yet."</p>
        </section>
    }
}
