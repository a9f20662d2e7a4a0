//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use anyhow::Result;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::helpers::{assert_json, TestServer};

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub password_confirmation: String,
}

impl RegisterRequest {
    /// Fresh email per call, unique across test runs sharing a database
    pub fn unique() -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self {
            firstname: "Test".to_string(),
            lastname: format!("User{}", &suffix[..8]),
            email: format!("test-{suffix}@example.com"),
            phone: "0612345678".to_string(),
            password: "password123".to_string(),
            password_confirmation: "password123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Scan request
#[derive(Debug, Serialize)]
pub struct ScanRequest {
    pub scanned_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ScanRequest {
    pub fn new(scanned_id: &str, reason: Option<&str>) -> Self {
        Self {
            scanned_id: scanned_id.to_string(),
            reason: reason.map(str::to_string),
        }
    }
}

/// User response
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Registration response
#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// Unread count response
#[derive(Debug, Deserialize)]
pub struct UnreadCountResponse {
    pub unread: i64,
}

/// A registered user holding a live token
#[derive(Debug, Clone)]
pub struct TestUser {
    pub user: UserResponse,
    pub token: String,
}

impl TestUser {
    pub fn id(&self) -> &str {
        &self.user.id
    }
}

/// Register a fresh user and log them in
pub async fn register_and_login(server: &TestServer) -> Result<TestUser> {
    let request = RegisterRequest::unique();

    let response = server.post("/register", &request).await?;
    let registered: RegisterResponse = assert_json(response, StatusCode::CREATED).await?;

    let response = server
        .post("/login", &LoginRequest::from_register(&request))
        .await?;
    let login: LoginResponse = assert_json(response, StatusCode::OK).await?;

    Ok(TestUser {
        user: registered.user,
        token: login.token,
    })
}
