//! Sign-out button.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::context::use_auth;

/// Clears the session (server call best-effort) and returns to the home page.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    view! {
        <button
            class="logout-button"
            type="button"
            disabled=move || busy.get()
            on:click=move |_| {
                if busy.get() {
                    return;
                }
                busy.set(true);
                #[cfg(feature = "hydrate")]
                {
                    let auth = auth.clone();
                    let navigate = navigate.clone();
                    leptos::task::spawn_local(async move {
                        let _ = auth.logout().await;
                        busy.set(false);
                        navigate("/", leptos_router::NavigateOptions::default());
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                let _ = (&auth, &navigate);
            }
        >
            "Sign out"
        </button>
    }
}
