//! Declarative route table.
//!
//! The admin subtree declares its auth/admin requirements once, on the
//! `/admin` layout route; children inherit them through
//! [`effective_meta`], which merges metadata from the root down.
//!
//! `app` declares the same tree with `leptos_router` components. This table
//! is what the guard and the unmatched-path fallback consult.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

/// Named routes known to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteName {
    Home,
    Login,
    Register,
    ArticleDetail,
    /// Layout wrapping every admin page; never a navigation target itself.
    Admin,
    AdminDashboard,
    AdminArticles,
    AdminArticleCreate,
    AdminArticleEdit,
    AdminCategories,
    AdminComments,
    AdminSettings,
}

impl RouteName {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Register => "register",
            Self::ArticleDetail => "article-detail",
            Self::Admin => "admin",
            Self::AdminDashboard => "admin-dashboard",
            Self::AdminArticles => "admin-articles",
            Self::AdminArticleCreate => "admin-article-create",
            Self::AdminArticleEdit => "admin-article-edit",
            Self::AdminCategories => "admin-categories",
            Self::AdminComments => "admin-comments",
            Self::AdminSettings => "admin-settings",
        }
    }
}

impl std::fmt::Display for RouteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access requirements attached to a route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_admin: bool,
}

impl RouteMeta {
    pub const PUBLIC: Self = Self { requires_auth: false, requires_admin: false };
    pub const ADMIN: Self = Self { requires_auth: true, requires_admin: true };

    /// Combine parent and child requirements; a flag set anywhere applies.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            requires_auth: self.requires_auth || other.requires_auth,
            requires_admin: self.requires_admin || other.requires_admin,
        }
    }
}

/// When a route's view is loaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewLoad {
    /// Bundled with the entry and available immediately.
    #[default]
    Eager,
    /// Loaded on first navigation to the route.
    Lazy,
}

/// One entry of the route tree. Child paths are relative to the parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: RouteName,
    pub load: ViewLoad,
    pub meta: RouteMeta,
    pub children: Vec<Route>,
}

impl Route {
    #[must_use]
    pub fn new(path: &'static str, name: RouteName) -> Self {
        Self { path, name, load: ViewLoad::Eager, meta: RouteMeta::PUBLIC, children: Vec::new() }
    }

    #[must_use]
    pub fn lazy(mut self) -> Self {
        self.load = ViewLoad::Lazy;
        self
    }

    #[must_use]
    pub fn meta(mut self, meta: RouteMeta) -> Self {
        self.meta = meta;
        self
    }

    #[must_use]
    pub fn children(mut self, children: Vec<Route>) -> Self {
        self.children = children;
        self
    }

    /// Depth-first walk over this route and its descendants.
    pub fn walk(&self, visit: &mut impl FnMut(&Route)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Depth-first walk handing each route its absolute path pattern and the
    /// metadata merged from the root down to it.
    pub fn walk_resolved(&self, base: &str, inherited: RouteMeta, visit: &mut impl FnMut(&Route, &str, RouteMeta)) {
        let path = join(base, self.path);
        let meta = inherited.merge(self.meta);
        visit(self, &path, meta);
        for child in &self.children {
            child.walk_resolved(&path, meta, visit);
        }
    }
}

fn join(base: &str, path: &str) -> String {
    let joined = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if joined.len() > 1 { joined.trim_end_matches('/').to_owned() } else { joined }
}

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// The application's route table.
#[must_use]
pub fn routes() -> Vec<Route> {
    vec![
        Route::new("/", RouteName::Home),
        Route::new("/login", RouteName::Login),
        Route::new("/register", RouteName::Register),
        Route::new("/article/:id", RouteName::ArticleDetail).lazy(),
        Route::new("/admin", RouteName::Admin).lazy().meta(RouteMeta::ADMIN).children(vec![
            Route::new("", RouteName::AdminDashboard).lazy(),
            Route::new("articles", RouteName::AdminArticles).lazy(),
            Route::new("articles/create", RouteName::AdminArticleCreate).lazy(),
            Route::new("articles/edit/:id", RouteName::AdminArticleEdit).lazy(),
            Route::new("categories", RouteName::AdminCategories).lazy(),
            Route::new("comments", RouteName::AdminComments).lazy(),
            Route::new("settings", RouteName::AdminSettings).lazy(),
        ]),
    ]
}

/// Metadata in effect for `name`: its own, merged with every ancestor's.
#[must_use]
pub fn effective_meta(table: &[Route], name: RouteName) -> Option<RouteMeta> {
    let mut found = None;
    for root in table {
        root.walk_resolved("", RouteMeta::PUBLIC, &mut |route, _, meta| {
            if route.name == name {
                found = Some(meta);
            }
        });
    }
    found
}

/// Absolute path patterns of every navigable route (layouts excluded), in
/// declaration order.
#[must_use]
pub fn leaf_patterns(table: &[Route]) -> Vec<(RouteName, String)> {
    let mut out = Vec::new();
    for root in table {
        root.walk_resolved("", RouteMeta::PUBLIC, &mut |route, path, _| {
            if route.children.is_empty() {
                out.push((route.name, path.to_owned()));
            }
        });
    }
    out
}

/// `path` with its static segments spelled as declared, when it matches a
/// route once ASCII case is ignored. Param values are kept as given.
///
/// `None` when no route matches or `path` is already spelled canonically.
#[must_use]
pub fn canonical_path(table: &[Route], path: &str) -> Option<String> {
    let actual: Vec<&str> = segments(path).collect();
    for (_, pattern) in leaf_patterns(table) {
        let expected: Vec<&str> = segments(&pattern).collect();
        if expected.len() != actual.len() {
            continue;
        }
        let folded: Option<Vec<&str>> = expected
            .iter()
            .zip(&actual)
            .map(|(want, got)| match want.strip_prefix(':') {
                Some(_) => Some(*got),
                None => want.eq_ignore_ascii_case(got).then_some(*want),
            })
            .collect();
        if let Some(folded) = folded {
            let canonical = format!("/{}", folded.join("/"));
            return (canonical != path).then_some(canonical);
        }
    }
    None
}
