//! Single article view at `/article/:id`, loaded on first visit.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use leptos_router::{LazyRoute, lazy_route};

use crate::components::session_badge::SessionBadge;

#[component]
pub fn ArticleDetailPage(#[prop(into)] id: String) -> impl IntoView {
    let heading = id.clone();
    view! {
        <div class="article-page">
            <header class="site-header">
                <A href="/">"Blog"</A>
                <SessionBadge/>
            </header>
            <article class="article-detail" data-article-id=id>
                <h1>"Article #" {heading}</h1>
            </article>
        </div>
    }
}

/// Route view for `/article/:id`.
#[derive(Debug)]
pub struct ArticleDetailRoute;

#[lazy_route]
impl LazyRoute for ArticleDetailRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        let params = use_params_map();
        let id = move || params.with(|p| p.get("id").unwrap_or_default());
        view! { {move || view! { <ArticleDetailPage id=id()/> }} }.into_any()
    }
}
