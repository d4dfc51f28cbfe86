//! Fallback for paths no route matches.
//!
//! Route matching is case-sensitive, so a path that only differs from a
//! declared route in the case of its static segments is redirected to the
//! declared spelling first; the guard then runs as for any other visit.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Redirect};
use leptos_router::hooks::use_location;

use crate::router::table;

#[component]
pub fn NotFoundPage(#[prop(into)] path: String) -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"Page not found"</h1>
            <p class="not-found-page__path">{path}</p>
            <A href="/">"Back to the blog"</A>
        </div>
    }
}

/// Rendered by the router for unmatched locations.
#[component]
pub fn UnmatchedPath() -> impl IntoView {
    let pathname = use_location().pathname;

    move || {
        let path = pathname.get();
        match table::canonical_path(&table::routes(), &path) {
            Some(canonical) => {
                let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
                view! { <Redirect path=canonical options=options/> }.into_any()
            }
            None => view! { <NotFoundPage path=path/> }.into_any(),
        }
    }
}
