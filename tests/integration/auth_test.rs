//! Integration tests for the login, logout, and introspection flow.

use http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_login_success_sets_cookie() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Acme Corp").await;
    app.create_test_account(org, "alice@acme.test", "password123", "user")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "alice@acme.test",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("success").unwrap(), true);
    assert_eq!(
        response.body["user"]["email"].as_str().unwrap(),
        "alice@acme.test"
    );
    assert!(response
        .session_cookie(&app.config.auth.cookie_name)
        .is_some());
}

#[tokio::test]
async fn test_login_email_is_case_insensitive() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Case Org").await;
    app.create_test_account(org, "bob@case.test", "password123", "user")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "BOB@Case.Test",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Wrongpass Org").await;
    app.create_test_account(org, "carol@wp.test", "password123", "user")
        .await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "carol@wp.test",
                "password": "not-the-password",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email_matches_wrong_password() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Enum Org").await;
    app.create_test_account(org, "dave@enum.test", "password123", "user")
        .await;

    let unknown = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "nobody@enum.test",
                "password": "password123",
            })),
            None,
        )
        .await;
    let wrong = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "dave@enum.test",
                "password": "bad",
            })),
            None,
        )
        .await;

    // Identical status and message so callers cannot enumerate which
    // addresses exist.
    assert_eq!(unknown.status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.body["message"], wrong.body["message"]);
}

#[tokio::test]
async fn test_login_disabled_account() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Disabled Org").await;
    let account = app
        .create_test_account(org, "erin@dis.test", "password123", "user")
        .await;
    app.deactivate_account(account).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "erin@dis.test",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_login_disabled_account_with_wrong_password() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Disabled2 Org").await;
    let account = app
        .create_test_account(org, "ivan@dis2.test", "password123", "user")
        .await;
    app.deactivate_account(account).await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "ivan@dis2.test",
                "password": "not-the-password",
            })),
            None,
        )
        .await;

    // The disabled check happens before the password check, so the
    // wrong password still yields 403 rather than 401.
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(serde_json::json!({
                "email": "",
                "password": "",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_introspection_with_live_session() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Intro Org").await;
    app.create_test_account(org, "frank@intro.test", "password123", "admin")
        .await;
    let cookie = app.login("frank@intro.test", "password123").await;

    let response = app
        .request("GET", "/api/auth/session", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["authenticated"], true);
    assert_eq!(response.body["user"]["role"].as_str().unwrap(), "admin");
}

#[tokio::test]
async fn test_introspection_without_cookie() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/auth/session", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["authenticated"], false);
}

#[tokio::test]
async fn test_introspection_with_garbage_cookie() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/auth/session", None, Some("garbage-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_revokes_session() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Logout Org").await;
    app.create_test_account(org, "grace@out.test", "password123", "user")
        .await;
    let cookie = app.login("grace@out.test", "password123").await;

    let logout = app
        .request("POST", "/api/auth/logout", None, Some(&cookie))
        .await;
    assert_eq!(logout.status, StatusCode::OK);

    // The old cookie no longer resolves even though the signed token is
    // still within its validity window.
    let after = app
        .request("GET", "/api/auth/session", None, Some(&cookie))
        .await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_logout_without_session_still_succeeds() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/api/auth/logout", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_deactivation_invalidates_live_session() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Deact Org").await;
    let account = app
        .create_test_account(org, "heidi@deact.test", "password123", "user")
        .await;
    let cookie = app.login("heidi@deact.test", "password123").await;

    let before = app
        .request("GET", "/api/auth/session", None, Some(&cookie))
        .await;
    assert_eq!(before.status, StatusCode::OK);

    app.deactivate_account(account).await;

    let after = app
        .request("GET", "/api/auth/session", None, Some(&cookie))
        .await;
    assert_eq!(after.status, StatusCode::UNAUTHORIZED);
}
