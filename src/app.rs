//! Root application component with routing and context providers.
//!
//! Routes are declared here with `leptos_router`, mirroring
//! `router::table::routes`. The `/admin` subtree is guarded by `RouteGate`
//! inside the lazily loaded admin layout.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    Lazy,
    components::{ParentRoute, Route, Router, Routes},
    path,
};

use crate::pages::admin::{
    AdminArticleCreateRoute, AdminArticleEditRoute, AdminArticlesRoute, AdminCategoriesRoute, AdminCommentsRoute,
    AdminDashboardRoute, AdminRoute, AdminSettingsRoute,
};
use crate::pages::article::ArticleDetailRoute;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::UnmatchedPath;
use crate::pages::register::RegisterPage;
use crate::session::context::provide_auth;

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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth();

    view! {
        <Stylesheet id="leptos" href="/pkg/cms-client.css"/>
        <Title text="CMS"/>

        <Router>
            <Routes fallback=|| view! { <UnmatchedPath/> }>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>
                <Route path=path!("/article/:id") view={Lazy::<ArticleDetailRoute>::new()}/>
                <ParentRoute path=path!("/admin") view={Lazy::<AdminRoute>::new()}>
                    <Route path=path!("") view={Lazy::<AdminDashboardRoute>::new()}/>
                    <Route path=path!("articles") view={Lazy::<AdminArticlesRoute>::new()}/>
                    <Route path=path!("articles/create") view={Lazy::<AdminArticleCreateRoute>::new()}/>
                    <Route path=path!("articles/edit/:id") view={Lazy::<AdminArticleEditRoute>::new()}/>
                    <Route path=path!("categories") view={Lazy::<AdminCategoriesRoute>::new()}/>
                    <Route path=path!("comments") view={Lazy::<AdminCommentsRoute>::new()}/>
                    <Route path=path!("settings") view={Lazy::<AdminSettingsRoute>::new()}/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
