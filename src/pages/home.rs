//! Public landing page.

use leptos::prelude::*;

use crate::components::session_badge::SessionBadge;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="site-header">
                <h1>"Blog"</h1>
                <SessionBadge/>
            </header>
            <main class="article-feed">
                <p>"Latest articles"</p>
            </main>
        </div>
    }
}
