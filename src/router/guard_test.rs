use super::*;
use crate::net::types::User;
use crate::router::table::{RouteName, effective_meta, leaf_patterns, routes};

fn session(is_admin: Option<bool>) -> Session {
    match is_admin {
        None => Session::anonymous(),
        Some(is_admin) => Session::signed_in(User {
            id: Some(1),
            username: Some("u".to_owned()),
            is_admin: Some(is_admin),
            ..User::default()
        }),
    }
}

fn meta(name: RouteName) -> RouteMeta {
    effective_meta(&routes(), name).expect("route")
}

fn admin_pages() -> Vec<RouteName> {
    let table = routes();
    leaf_patterns(&table).into_iter().map(|(name, _)| name).filter(|name| meta(*name) != RouteMeta::PUBLIC).collect()
}

#[test]
fn public_routes_proceed_for_everyone() {
    for s in [session(None), session(Some(false)), session(Some(true))] {
        for name in [RouteName::Home, RouteName::Login, RouteName::Register, RouteName::ArticleDetail] {
            assert_eq!(check_meta(meta(name), &s), GuardDecision::Proceed, "{name}");
        }
    }
}

#[test]
fn every_admin_route_sends_anonymous_to_login() {
    let pages = admin_pages();
    assert_eq!(pages.len(), 7);
    for name in pages {
        assert_eq!(check_meta(meta(name), &session(None)), GuardDecision::RedirectToLogin, "{name}");
    }
}

#[test]
fn every_admin_route_sends_non_admin_home() {
    for name in admin_pages() {
        assert_eq!(check_meta(meta(name), &session(Some(false))), GuardDecision::RedirectHome, "{name}");
    }
}

#[test]
fn anonymous_to_admin_articles_lands_on_login() {
    let decision = check_meta(meta(RouteName::AdminArticles), &session(None));
    assert_eq!(decision.redirect_path(), Some("/login"));
}

#[test]
fn non_admin_to_admin_settings_lands_home() {
    let decision = check_meta(meta(RouteName::AdminSettings), &session(Some(false)));
    assert_eq!(decision.redirect_path(), Some("/"));
}

#[test]
fn admin_user_proceeds_to_categories() {
    assert_eq!(check_meta(meta(RouteName::AdminCategories), &session(Some(true))), GuardDecision::Proceed);
}

#[test]
fn admin_only_meta_with_no_user_goes_home_without_panicking() {
    let meta = RouteMeta { requires_auth: false, requires_admin: true };
    assert_eq!(check_meta(meta, &session(None)), GuardDecision::RedirectHome);
}

#[test]
fn auth_only_meta_admits_any_signed_in_user() {
    let meta = RouteMeta { requires_auth: true, requires_admin: false };
    assert_eq!(check_meta(meta, &session(Some(false))), GuardDecision::Proceed);
}

#[test]
fn redirect_paths() {
    assert_eq!(GuardDecision::Proceed.redirect_path(), None);
    assert_eq!(GuardDecision::RedirectToLogin.redirect_path(), Some("/login"));
    assert_eq!(GuardDecision::RedirectHome.redirect_path(), Some("/"));
}

// =============================================================
// admission
// =============================================================

#[test]
fn guarded_route_is_pending_while_session_is_unknown() {
    for name in admin_pages() {
        assert_eq!(admission(meta(name), None), None, "{name}");
    }
}

#[test]
fn public_route_proceeds_while_session_is_unknown() {
    assert_eq!(admission(meta(RouteName::Home), None), Some(GuardDecision::Proceed));
}

#[test]
fn known_session_gets_the_guard_decision() {
    let categories = meta(RouteName::AdminCategories);
    assert_eq!(admission(categories, Some(&session(Some(true)))), Some(GuardDecision::Proceed));
    assert_eq!(admission(categories, Some(&session(None))), Some(GuardDecision::RedirectToLogin));
    assert_eq!(admission(categories, Some(&session(Some(false)))), Some(GuardDecision::RedirectHome));
}
