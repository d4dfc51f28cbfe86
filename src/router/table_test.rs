use super::*;

fn all_routes() -> Vec<Route> {
    let mut out = Vec::new();
    for route in routes() {
        route.walk(&mut |r| out.push(r.clone()));
    }
    out
}

const ADMIN_PAGES: [RouteName; 7] = [
    RouteName::AdminDashboard,
    RouteName::AdminArticles,
    RouteName::AdminArticleCreate,
    RouteName::AdminArticleEdit,
    RouteName::AdminCategories,
    RouteName::AdminComments,
    RouteName::AdminSettings,
];

#[test]
fn public_routes_have_no_requirements() {
    for route in routes().iter().filter(|r| r.name != RouteName::Admin) {
        assert_eq!(route.meta, RouteMeta::PUBLIC, "{}", route.name);
    }
}

#[test]
fn admin_requirements_live_on_parent_only() {
    let table = routes();
    let admin = table.iter().find(|r| r.name == RouteName::Admin).expect("admin route");
    assert_eq!(admin.meta, RouteMeta::ADMIN);
    assert_eq!(admin.children.len(), 7);
    for child in &admin.children {
        assert_eq!(child.meta, RouteMeta::PUBLIC, "{}", child.name);
    }
}

#[test]
fn admin_children_inherit_parent_requirements() {
    let table = routes();
    for name in ADMIN_PAGES {
        assert_eq!(effective_meta(&table, name), Some(RouteMeta::ADMIN), "{name}");
    }
    assert_eq!(effective_meta(&table, RouteName::ArticleDetail), Some(RouteMeta::PUBLIC));
}

#[test]
fn admin_children_are_relative() {
    let table = routes();
    let admin = table.iter().find(|r| r.name == RouteName::Admin).expect("admin route");
    assert!(admin.children.iter().all(|c| !c.path.starts_with('/')));
}

#[test]
fn leaf_patterns_are_absolute_and_skip_layouts() {
    let patterns = leaf_patterns(&routes());
    assert_eq!(patterns.len(), 11);
    assert!(patterns.iter().all(|(name, _)| *name != RouteName::Admin));
    assert!(patterns.contains(&(RouteName::AdminDashboard, "/admin".to_owned())));
    assert!(patterns.contains(&(RouteName::AdminArticleEdit, "/admin/articles/edit/:id".to_owned())));
    assert!(patterns.contains(&(RouteName::Home, "/".to_owned())));
}

#[test]
fn route_names_are_unique() {
    let mut names: Vec<RouteName> = all_routes().iter().map(|r| r.name).collect();
    let total = names.len();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn entry_views_are_eager_and_the_rest_lazy() {
    for route in all_routes() {
        let expected = match route.name {
            RouteName::Home | RouteName::Login | RouteName::Register => ViewLoad::Eager,
            _ => ViewLoad::Lazy,
        };
        assert_eq!(route.load, expected, "{}", route.name);
    }
}

#[test]
fn meta_merge_is_logical_or() {
    let auth_only = RouteMeta { requires_auth: true, requires_admin: false };
    assert_eq!(RouteMeta::PUBLIC.merge(auth_only), auth_only);
    assert_eq!(auth_only.merge(RouteMeta::ADMIN), RouteMeta::ADMIN);
    assert_eq!(RouteMeta::PUBLIC.merge(RouteMeta::PUBLIC), RouteMeta::PUBLIC);
}

#[test]
fn route_names_display_as_kebab_case() {
    assert_eq!(RouteName::AdminArticleEdit.to_string(), "admin-article-edit");
    assert_eq!(RouteName::ArticleDetail.as_str(), "article-detail");
}

// =============================================================
// canonical_path
// =============================================================

#[test]
fn mixed_case_static_segments_fold_to_declared_spelling() {
    let table = routes();
    assert_eq!(canonical_path(&table, "/Admin/Articles"), Some("/admin/articles".to_owned()));
    assert_eq!(canonical_path(&table, "/ADMIN"), Some("/admin".to_owned()));
    assert_eq!(canonical_path(&table, "/Login/"), Some("/login".to_owned()));
}

#[test]
fn param_values_keep_their_case() {
    let table = routes();
    assert_eq!(canonical_path(&table, "/Article/AbC"), Some("/article/AbC".to_owned()));
    assert_eq!(canonical_path(&table, "/admin/Articles/EDIT/X1"), Some("/admin/articles/edit/X1".to_owned()));
}

#[test]
fn canonical_or_unknown_paths_have_no_rewrite() {
    let table = routes();
    assert_eq!(canonical_path(&table, "/admin/articles"), None);
    assert_eq!(canonical_path(&table, "/"), None);
    assert_eq!(canonical_path(&table, "/nowhere"), None);
    assert_eq!(canonical_path(&table, "/admin/articles/edit"), None);
}
