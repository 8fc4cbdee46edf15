//! Integration tests for tenant isolation and RBAC on portal endpoints.

use http::StatusCode;
use uuid::Uuid;

use crate::helpers;

async fn seed_document(app: &helpers::TestApp, org: Uuid, uploader: Uuid, title: &str) -> Uuid {
    let id = Uuid::new_v4();
    sqlx::query(
        r#"INSERT INTO documents (id, organization_id, title, category, file_path, file_name, mime_type, size, uploaded_by_id)
           VALUES ($1, $2, $3, 'general', '/tmp/doc.pdf', 'doc.pdf', 'application/pdf', 1024, $4)"#,
    )
    .bind(id)
    .bind(org)
    .bind(title)
    .bind(uploader)
    .execute(&app.db_pool)
    .await
    .expect("Failed to seed document");
    id
}

#[tokio::test]
async fn test_documents_require_authentication() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/documents", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_documents_are_tenant_scoped() {
    let app = helpers::TestApp::new().await;
    let org_a = app.create_test_org("Tenant A").await;
    let org_b = app.create_test_org("Tenant B").await;
    let alice = app
        .create_test_account(org_a, "alice@ta.test", "password123", "user")
        .await;
    let bob = app
        .create_test_account(org_b, "bob@tb.test", "password123", "user")
        .await;

    seed_document(&app, org_a, alice, "A only").await;
    seed_document(&app, org_b, bob, "B only").await;

    let cookie = app.login("alice@ta.test", "password123").await;
    let response = app
        .request("GET", "/api/documents", None, Some(&cookie))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let docs = response.body.as_array().unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["title"].as_str().unwrap(), "A only");
}

#[tokio::test]
async fn test_cross_tenant_document_looks_missing() {
    let app = helpers::TestApp::new().await;
    let org_a = app.create_test_org("Cross A").await;
    let org_b = app.create_test_org("Cross B").await;
    app.create_test_account(org_a, "carol@ca.test", "password123", "user")
        .await;
    let bob = app
        .create_test_account(org_b, "dan@cb.test", "password123", "user")
        .await;

    let foreign_doc = seed_document(&app, org_b, bob, "B secret").await;

    let cookie = app.login("carol@ca.test", "password123").await;
    let response = app
        .request(
            "GET",
            &format!("/api/documents/{foreign_doc}"),
            None,
            Some(&cookie),
        )
        .await;

    // 404, not 403: a foreign document must be indistinguishable from a
    // nonexistent one.
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ticket_lifecycle() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Ticket Org").await;
    app.create_test_account(org, "erin@tk.test", "password123", "user")
        .await;
    let cookie = app.login("erin@tk.test", "password123").await;

    let created = app
        .request(
            "POST",
            "/api/requests",
            Some(serde_json::json!({
                "subject": "Printer on fire",
                "description": "It is literally on fire.",
                "priority": "urgent",
            })),
            Some(&cookie),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["priority"].as_str().unwrap(), "urgent");
    assert_eq!(created.body["status"].as_str().unwrap(), "open");
    let ticket_id = created.body["id"].as_str().unwrap().to_string();

    let listed = app
        .request("GET", "/api/requests", None, Some(&cookie))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let detail = app
        .request(
            "GET",
            &format!("/api/requests/{ticket_id}"),
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    assert!(detail.body.get("events").unwrap().is_array());
}

#[tokio::test]
async fn test_ticket_invalid_priority_rejected() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Prio Org").await;
    app.create_test_account(org, "frank@pr.test", "password123", "user")
        .await;
    let cookie = app.login("frank@pr.test", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/requests",
            Some(serde_json::json!({
                "subject": "Subject",
                "description": "Description",
                "priority": "catastrophic",
            })),
            Some(&cookie),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_message_round_trip() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Msg Org").await;
    app.create_test_account(org, "grace@msg.test", "password123", "user")
        .await;
    let cookie = app.login("grace@msg.test", "password123").await;

    let thread_id = Uuid::new_v4();
    sqlx::query("INSERT INTO message_threads (id, organization_id, subject) VALUES ($1, $2, $3)")
        .bind(thread_id)
        .bind(org)
        .bind("Support thread")
        .execute(&app.db_pool)
        .await
        .expect("Failed to seed thread");

    let posted = app
        .request(
            "POST",
            &format!("/api/messages/{thread_id}"),
            Some(serde_json::json!({ "body": "Hello there" })),
            Some(&cookie),
        )
        .await;
    assert_eq!(posted.status, StatusCode::CREATED);

    let detail = app
        .request(
            "GET",
            &format!("/api/messages/{thread_id}"),
            None,
            Some(&cookie),
        )
        .await;
    assert_eq!(detail.status, StatusCode::OK);
    let messages = detail.body["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["body"].as_str().unwrap(), "Hello there");
}

#[tokio::test]
async fn test_audit_records_login() {
    let app = helpers::TestApp::new().await;
    let org = app.create_test_org("Audit Org").await;
    app.create_test_account(org, "heidi@au.test", "password123", "admin")
        .await;
    let cookie = app.login("heidi@au.test", "password123").await;

    let response = app.request("GET", "/api/audit", None, Some(&cookie)).await;

    assert_eq!(response.status, StatusCode::OK);
    let entries = response.body.as_array().unwrap();
    assert!(entries
        .iter()
        .any(|e| e["action"].as_str() == Some("login")));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"].as_str().unwrap(), "ok");
    assert_eq!(response.body["database"], true);
}
