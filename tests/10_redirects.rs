mod common;

use axum::http::StatusCode;
use tower::ServiceExt;

use portal_guard::app::app;

#[tokio::test]
async fn unlocalized_url_redirects_under_default_locale() {
    let res = app().oneshot(common::get("/co/dashboard")).await.unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(common::location(&res).as_deref(), Some("/en/co/dashboard"));
}

#[tokio::test]
async fn sentinel_locale_prefix_redirects_like_no_locale() {
    let res = app()
        .oneshot(common::get("/default/co/dashboard"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(common::location(&res).as_deref(), Some("/en/co/dashboard"));
}

#[tokio::test]
async fn locale_redirect_honors_preference_cookie() {
    let res = app()
        .oneshot(common::get_with_cookie("/co/dashboard", "portal_locale=ko"))
        .await
        .unwrap();
    assert_eq!(common::location(&res).as_deref(), Some("/ko/co/dashboard"));
}

#[tokio::test]
async fn locale_redirect_preserves_query() {
    let res = app()
        .oneshot(common::get("/acme/dashboard?tab=2"))
        .await
        .unwrap();
    assert_eq!(
        common::location(&res).as_deref(),
        Some("/en/acme/dashboard?tab=2")
    );
}

#[tokio::test]
async fn locale_redirect_takes_precedence_over_auth() {
    // A protected page with no credential still gets the locale first.
    let res = app()
        .oneshot(common::get("/acme/member-management"))
        .await
        .unwrap();
    assert_eq!(
        common::location(&res).as_deref(),
        Some("/en/acme/member-management")
    );
}

#[tokio::test]
async fn login_page_is_reachable_without_credential() {
    let res = app().oneshot(common::get("/en/login")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app()
        .oneshot(common::get("/en/acme/forgot-password"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn protected_page_without_credential_redirects_to_login_with_referer() {
    let res = app()
        .oneshot(common::get("/en/acme/member-management"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        common::location(&res).as_deref(),
        Some("/acme/login?referer=%2Fmember-management")
    );
}

#[tokio::test]
async fn tenant_root_without_credential_redirects_to_bare_login() {
    for uri in ["/en/acme", "/en/acme/"] {
        let res = app().oneshot(common::get(uri)).await.unwrap();
        assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(common::location(&res).as_deref(), Some("/acme/login"));
    }
}

#[tokio::test]
async fn authenticated_login_visit_redirects_to_tenant_root() {
    let cookie = format!("admin_token={}", common::token(&[], None, 3600));
    let res = app()
        .oneshot(common::get_with_cookie("/en/acme/login", &cookie))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(common::location(&res).as_deref(), Some("/acme/"));
}

#[tokio::test]
async fn expired_credential_is_treated_as_absent() {
    let cookie = format!("admin_token={}", common::token(&["member:get"], None, -100));
    let res = app()
        .oneshot(common::get_with_cookie("/en/acme/member-management", &cookie))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        common::location(&res).as_deref(),
        Some("/acme/login?referer=%2Fmember-management")
    );
}

#[tokio::test]
async fn malformed_credential_is_treated_as_absent() {
    let res = app()
        .oneshot(common::get_with_cookie(
            "/en/acme/member-management",
            "admin_token=garbage",
        ))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        common::location(&res).as_deref(),
        Some("/acme/login?referer=%2Fmember-management")
    );
}

#[tokio::test]
async fn merchant_space_ignores_administrator_cookie() {
    let cookie = format!("admin_token={}", common::token(&[], None, 3600));
    let res = app()
        .oneshot(common::get_with_cookie("/en/acme/merchant/dashboard", &cookie))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        common::location(&res).as_deref(),
        Some("/acme/merchant/login?referer=%2Fdashboard")
    );
}

#[tokio::test]
async fn framework_api_and_static_paths_never_redirect() {
    // All three pass the guard untouched, locale or not, credential or not.
    // The demo surface serves no assets, so a plain 404 comes back instead
    // of any redirect.
    for uri in [
        "/_app/chunks/main.js",
        "/en/acme/api/members",
        "/en/acme/logo.png",
    ] {
        let res = app().oneshot(common::get(uri)).await.unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND, "uri: {}", uri);
        assert_eq!(common::location(&res), None, "uri: {}", uri);
    }
}
