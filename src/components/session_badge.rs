//! Header fragment showing who is signed in.

use leptos::prelude::*;
use leptos_router::components::A;

use super::logout_button::LogoutButton;
use crate::session::Session;
use crate::session::context::use_auth;

/// Sign-in links for visitors; username, admin link and sign-out for users.
#[component]
pub fn SessionBadge() -> impl IntoView {
    let session = use_auth().session;

    view! {
        <div class="session-badge">
            <Show
                when=move || session.with(|s| s.as_ref().is_some_and(Session::is_authenticated))
                fallback=|| view! {
                    <A href="/login">"Sign in"</A>
                    <A href="/register">"Register"</A>
                }
            >
                <span class="session-badge__user">
                    {move || session.with(|s| s.as_ref().map(Session::display_name).unwrap_or_default())}
                </span>
                <Show when=move || session.with(|s| s.as_ref().is_some_and(Session::is_admin))>
                    <A href="/admin">"Admin"</A>
                </Show>
                <LogoutButton/>
            </Show>
        </div>
    }
}
