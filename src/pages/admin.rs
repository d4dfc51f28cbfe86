//! Admin area: layout plus dashboard, articles, categories, comments and
//! settings screens.
//!
//! Every screen is a lazy route, so none of this module's views load before
//! the admin area is first visited. The layout renders through `RouteGate`,
//! which only admits signed-in admins.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_params_map;
use leptos_router::{LazyRoute, lazy_route};

use crate::components::logout_button::LogoutButton;
use crate::components::route_gate::RouteGate;
use crate::router::RouteName;
use crate::session::Session;
use crate::session::context::use_auth;

/// Sidebar entries as (label, href).
const NAV_LINKS: [(&str, &str); 5] = [
    ("Dashboard", "/admin"),
    ("Articles", "/admin/articles"),
    ("Categories", "/admin/categories"),
    ("Comments", "/admin/comments"),
    ("Settings", "/admin/settings"),
];

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let session = use_auth().session;

    view! {
        <div class="admin-layout">
            <aside class="admin-sidebar">
                <A href="/">"Blog"</A>
                <nav class="admin-nav">
                    {NAV_LINKS.iter().map(|(label, href)| view! { <A href=*href>{*label}</A> }).collect_view()}
                </nav>
                <div class="admin-sidebar__user">
                    {move || session.with(|s| s.as_ref().map(Session::display_name).unwrap_or_default())}
                </div>
                <LogoutButton/>
            </aside>
            <section class="admin-content">{children()}</section>
        </div>
    }
}

#[component]
fn AdminPanel(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="admin-panel">
            <h1>{title}</h1>
            {children()}
        </div>
    }
}

/// `/admin` layout; child screens render into its outlet.
#[derive(Debug)]
pub struct AdminRoute;

#[lazy_route]
impl LazyRoute for AdminRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        view! {
            <RouteGate route=RouteName::Admin>
                <AdminLayout>
                    <Outlet/>
                </AdminLayout>
            </RouteGate>
        }
        .into_any()
    }
}

#[derive(Debug)]
pub struct AdminDashboardRoute;

#[lazy_route]
impl LazyRoute for AdminDashboardRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        view! {
            <AdminPanel title="Dashboard">
                <p>"Overview of articles, comments and site activity."</p>
            </AdminPanel>
        }
        .into_any()
    }
}

#[derive(Debug)]
pub struct AdminArticlesRoute;

#[lazy_route]
impl LazyRoute for AdminArticlesRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        view! {
            <AdminPanel title="Articles">
                <A href="/admin/articles/create">"New article"</A>
            </AdminPanel>
        }
        .into_any()
    }
}

/// Editor title; `id` is set when editing an existing article.
fn editor_title(id: Option<&str>) -> String {
    match id {
        Some(id) => format!("Edit article #{id}"),
        None => "New article".to_owned(),
    }
}

#[component]
fn ArticleEditor(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <AdminPanel title=title>
            <A href="/admin/articles">"Back to articles"</A>
        </AdminPanel>
    }
}

#[derive(Debug)]
pub struct AdminArticleCreateRoute;

#[lazy_route]
impl LazyRoute for AdminArticleCreateRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        view! { <ArticleEditor title=editor_title(None)/> }.into_any()
    }
}

#[derive(Debug)]
pub struct AdminArticleEditRoute;

#[lazy_route]
impl LazyRoute for AdminArticleEditRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        let params = use_params_map();
        view! {
            {move || {
                let id = params.with(|p| p.get("id"));
                view! { <ArticleEditor title=editor_title(id.as_deref())/> }
            }}
        }
        .into_any()
    }
}

#[derive(Debug)]
pub struct AdminCategoriesRoute;

#[lazy_route]
impl LazyRoute for AdminCategoriesRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        view! {
            <AdminPanel title="Categories">
                <p>"Manage article categories."</p>
            </AdminPanel>
        }
        .into_any()
    }
}

#[derive(Debug)]
pub struct AdminCommentsRoute;

#[lazy_route]
impl LazyRoute for AdminCommentsRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        view! {
            <AdminPanel title="Comments">
                <p>"Approve or reject reader comments."</p>
            </AdminPanel>
        }
        .into_any()
    }
}

#[derive(Debug)]
pub struct AdminSettingsRoute;

#[lazy_route]
impl LazyRoute for AdminSettingsRoute {
    fn data() -> Self {
        Self
    }

    fn view(_this: Self) -> AnyView {
        view! {
            <AdminPanel title="Settings">
                <p>"Site-wide configuration."</p>
            </AdminPanel>
        }
        .into_any()
    }
}
