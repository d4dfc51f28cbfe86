//! Guarded wrapper for route subtrees.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::router::guard;
use crate::router::table::{self, RouteMeta, RouteName};
use crate::session::context::use_auth;

/// Renders `children` only once the guard admits the current session to
/// `route`; otherwise replaces the rejected URL with the guard's redirect.
///
/// While the session is unknown (server render, first hydration pass) a
/// placeholder is shown and nothing is redirected.
#[component]
pub fn RouteGate(route: RouteName, children: ChildrenFn) -> impl IntoView {
    let session = use_auth().session;
    let meta = table::effective_meta(&table::routes(), route).unwrap_or(RouteMeta::ADMIN);
    let decision = Memo::new(move |_| session.with(|session| guard::admission(meta, session.as_ref())));

    move || match decision.get() {
        None => view! { <p class="route-gate__pending">"Checking session..."</p> }.into_any(),
        Some(decision) => match decision.redirect_path() {
            None => children().into_any(),
            Some(path) => {
                let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                view! { <Redirect path=path options=options/> }.into_any()
            }
        },
    }
}
