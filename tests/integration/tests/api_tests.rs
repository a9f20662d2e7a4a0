//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/register", &request).await.unwrap();
    let body: Value = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body["message"], "success");
    assert_eq!(body["user"]["email"], request.email.as_str());
    assert!(body["user"]["id"].is_string());
    assert!(body["user"].get("password").is_none());
    assert!(body.get("token").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    server.post("/register", &request).await.unwrap();

    let response = server.post("/register", &request).await.unwrap();
    let body: Value = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(body["errors"]["email"][0], "The email has already been taken.");
}

#[tokio::test]
async fn test_login_and_current_user() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_and_login(&server).await.unwrap();

    let response = server.get_auth("/user", &alice.token).await.unwrap();
    let me: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(me.id, alice.user.id);
    assert_eq!(me.email, alice.user.email);

    // Same routes are served under /api
    let response = server.get_auth("/api/user", &alice.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/register", &request).await.unwrap();

    let wrong = LoginRequest {
        email: request.email.clone(),
        password: "wrong-password".to_string(),
    };
    let response = server.post("/login", &wrong).await.unwrap();
    let body: Value = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    assert_eq!(body["message"], "Invalid credentials");
    assert_eq!(body["errors"]["email"][0], "Invalid credentials");
}

#[tokio::test]
async fn test_logout_revokes_only_that_token() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();
    server.post("/register", &request).await.unwrap();

    let login = LoginRequest::from_register(&request);
    let first: LoginResponse = assert_json(server.post("/login", &login).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();
    let second: LoginResponse = assert_json(server.post("/login", &login).await.unwrap(), StatusCode::OK)
        .await
        .unwrap();

    let response = server.post_auth_empty("/logout", &first.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["message"], "Logged out successfully");

    let response = server.get_auth("/user", &first.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::UNAUTHORIZED).await.unwrap();
    assert_eq!(body["message"], "Unauthenticated.");

    let response = server.get_auth("/user", &second.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_public_profile() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_and_login(&server).await.unwrap();
    let bob = register_and_login(&server).await.unwrap();

    let response = server
        .get_auth(&format!("/users/{}", bob.id()), &alice.token)
        .await
        .unwrap();
    let profile: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.email, bob.user.email);

    let response = server.get_auth("/users/1", &alice.token).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    // Anyone holding the QR code can open the profile without signing in
    let response = server.get(&format!("/users/{}", bob.id())).await.unwrap();
    let profile: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(profile.id, bob.id());
}

// ============================================================================
// Match Tests
// ============================================================================

#[tokio::test]
async fn test_scan_accept_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_and_login(&server).await.unwrap();
    let bob = register_and_login(&server).await.unwrap();

    // Alice scans Bob
    let response = server
        .post_auth(
            "/matches/scan",
            &alice.token,
            &ScanRequest::new(bob.id(), Some("Met at the booth")),
        )
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let match_id = created["id"].as_str().unwrap().to_string();

    assert_eq!(created["scanner_id"], alice.id());
    assert_eq!(created["scanned_id"], bob.id());
    assert_eq!(created["reason"], "Met at the booth");
    assert_eq!(created["scanner_status"], true);
    assert_eq!(created["scanned_status"], false);

    // Bob got a proposal
    let response = server.get_auth("/notifications/unread-count", &bob.token).await.unwrap();
    let count: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.unread, 1);

    // Alice cannot accept her own proposal
    let response = server
        .post_auth_empty(&format!("/matches/{match_id}/accept"), &alice.token)
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["message"], "Match not found or not authorized");

    // Bob accepts
    let response = server
        .post_auth_empty(&format!("/matches/{match_id}/accept"), &bob.token)
        .await
        .unwrap();
    let accepted: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(accepted["scanned_status"], true);
    assert!(accepted.get("reason").is_none());

    // Alice got an acceptance
    let response = server.get_auth("/notifications", &alice.token).await.unwrap();
    let notifications: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(notifications.len(), 2);
    assert_eq!(notifications[0]["type"], "acceptance");
    assert_eq!(notifications[0]["status"], true);
    assert_eq!(notifications[0]["read"], false);
    assert_eq!(notifications[0]["scanner"]["id"], alice.id());
    assert_eq!(notifications[0]["scanned"]["id"], bob.id());
    assert_eq!(notifications[1]["type"], "proposal");
}

#[tokio::test]
async fn test_scan_self_and_unknown_target() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_and_login(&server).await.unwrap();

    let response = server
        .post_auth("/matches/scan", &alice.token, &ScanRequest::new(alice.id(), None))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body["message"], "You cannot scan yourself");

    let response = server
        .post_auth("/matches/scan", &alice.token, &ScanRequest::new("1", None))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert!(body["errors"]["scanned_id"].is_array());

    let response = server
        .post_auth("/matches/scan", &alice.token, &json!({ "reason": "hi" }))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert!(body["errors"]["scanned_id"].is_array());

    // Numeric ids are accepted too
    let response = server
        .post_auth("/matches/scan", &alice.token, &json!({ "scanned_id": 1 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_reason_length_limit() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_and_login(&server).await.unwrap();
    let bob = register_and_login(&server).await.unwrap();

    let long = "x".repeat(256);
    let response = server
        .post_auth("/matches/scan", &alice.token, &ScanRequest::new(bob.id(), Some(&long)))
        .await
        .unwrap();
    let body: Value = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert!(body["errors"]["reason"].is_array());
}

#[tokio::test]
async fn test_match_listing_and_visibility() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_and_login(&server).await.unwrap();
    let bob = register_and_login(&server).await.unwrap();
    let carol = register_and_login(&server).await.unwrap();

    let response = server
        .post_auth(
            "/matches/scan",
            &alice.token,
            &ScanRequest::new(bob.id(), Some("private note")),
        )
        .await
        .unwrap();
    let created: Value = assert_json(response, StatusCode::CREATED).await.unwrap();
    let match_id = created["id"].as_str().unwrap().to_string();

    // Scanner sees the reason and the scanned profile
    let response = server.get_auth("/matches", &alice.token).await.unwrap();
    let list: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list["scans"].as_array().unwrap().len(), 1);
    assert_eq!(list["scans"][0]["reason"], "private note");
    assert_eq!(list["scans"][0]["scanned"]["id"], bob.id());
    assert!(list["scanned_by"].as_array().unwrap().is_empty());

    // Scanned party never sees the reason
    let response = server.get_auth("/matches", &bob.token).await.unwrap();
    let list: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(list["scanned_by"].as_array().unwrap().len(), 1);
    assert!(list["scanned_by"][0].get("reason").is_none());
    assert_eq!(list["scanned_by"][0]["scanner"]["id"], alice.id());

    let response = server
        .get_auth(&format!("/matches/{match_id}"), &bob.token)
        .await
        .unwrap();
    let detail: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(detail.get("reason").is_none());
    assert_eq!(detail["scanner"]["id"], alice.id());
    assert_eq!(detail["scanned"]["id"], bob.id());

    // Outsiders get the same 404 as for a missing match
    let response = server
        .get_auth(&format!("/matches/{match_id}"), &carol.token)
        .await
        .unwrap();
    let outsider: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server.get_auth("/matches/1", &carol.token).await.unwrap();
    let missing: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(outsider, missing);
}

// ============================================================================
// Notification Tests
// ============================================================================

#[tokio::test]
async fn test_mark_notification_read() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = register_and_login(&server).await.unwrap();
    let bob = register_and_login(&server).await.unwrap();
    let carol = register_and_login(&server).await.unwrap();

    server
        .post_auth("/matches/scan", &alice.token, &ScanRequest::new(bob.id(), None))
        .await
        .unwrap();

    let response = server.get_auth("/notifications", &bob.token).await.unwrap();
    let notifications: Vec<Value> = assert_json(response, StatusCode::OK).await.unwrap();
    let id = notifications[0]["id"].as_str().unwrap().to_string();
    let path = format!("/notifications/{id}/read");

    let response = server.post_auth_empty(&path, &carol.token).await.unwrap();
    let body: Value = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body["message"], "Notification not found or not authorized");

    let response = server.post_auth_empty(&path, &bob.token).await.unwrap();
    let read: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(read["read"], true);

    // Idempotent
    let response = server.post_auth_empty(&path, &bob.token).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get_auth("/notifications/unread-count", &bob.token).await.unwrap();
    let count: UnreadCountResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(count.unread, 0);
}

#[tokio::test]
async fn test_requires_authentication() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    for path in ["/user", "/matches", "/notifications"] {
        let response = server.get(path).await.unwrap();
        assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
    }

    let response = server.get_auth("/matches", "not-a-real-token").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}
