//! Integration tests for the security page session listing.

use http::StatusCode;

use crate::helpers;

#[tokio::test]
async fn test_sessions_require_authentication() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/security/sessions", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_sessions_list_marks_current_and_hides_token() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Sec Org").await;
    app.create_test_account(org, "alice@sec.test", "password123", "user")
        .await;

    let _first = app.login("alice@sec.test", "password123").await;
    let second = app.login("alice@sec.test", "password123").await;

    let response = app
        .request("GET", "/api/security/sessions", None, Some(&second))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let sessions = response.body.as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    assert_eq!(
        sessions.iter().filter(|s| s["current"] == true).count(),
        1
    );
    for session in sessions {
        assert!(session.get("token").is_none());
        assert_eq!(session["live"], true);
    }
}

#[tokio::test]
async fn test_sessions_list_shows_revoked_session() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Sec Revoke Org").await;
    app.create_test_account(org, "bob@secr.test", "password123", "user")
        .await;

    let old = app.login("bob@secr.test", "password123").await;
    app.request("POST", "/api/auth/logout", None, Some(&old))
        .await;
    let cookie = app.login("bob@secr.test", "password123").await;

    let response = app
        .request("GET", "/api/security/sessions", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let sessions = response.body.as_array().unwrap();
    assert_eq!(sessions.len(), 2);
    let revoked: Vec<_> = sessions
        .iter()
        .filter(|s| !s["revoked_at"].is_null())
        .collect();
    assert_eq!(revoked.len(), 1);
    assert_eq!(revoked[0]["live"], false);
    assert_eq!(revoked[0]["current"], false);
}

#[tokio::test]
async fn test_sessions_only_list_own_account() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Sec Shared Org").await;
    app.create_test_account(org, "carol@secs.test", "password123", "user")
        .await;
    app.create_test_account(org, "dan@secs.test", "password123", "user")
        .await;

    app.login("carol@secs.test", "password123").await;
    let cookie = app.login("dan@secs.test", "password123").await;

    let response = app
        .request("GET", "/api/security/sessions", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let sessions = response.body.as_array().unwrap();
    // Carol's session must not appear in Dan's list.
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["current"], true);
}
