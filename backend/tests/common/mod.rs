//! Common test utilities for integration tests
//!
//! This module provides shared setup for DB-backed integration tests.
//! Tests using it are ignored by default and need a running PostgreSQL.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use jobtrack_backend::{config::AppConfig, routes, state::AppState};
use sqlx::PgPool;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
    pub pool: PgPool,
}

impl TestApp {
    /// Create a new test application with a real database
    pub async fn new() -> Self {
        let config = test_config();
        let pool = PgPool::connect(&config.database.url)
            .await
            .expect("Failed to connect to test database");

        // Run migrations
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        let state = AppState::new(pool.clone(), config);
        let app = routes::create_router(state);

        Self { app, pool }
    }

    /// Make a request with optional JSON body and bearer token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<&str>,
        token: Option<&str>,
    ) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        let body = match body {
            Some(b) => Body::from(b.to_string()),
            None => Body::empty(),
        };

        let response = self.app.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
        };

        (status, json)
    }

    /// Make an unauthenticated GET request
    pub async fn get(&self, path: &str) -> (StatusCode, serde_json::Value) {
        self.request("GET", path, None, None).await
    }

    /// Register a fresh user, returning their token
    pub async fn register_user(&self, name: &str, email: &str) -> String {
        let body = format!(
            r#"{{"name":"{name}","email":"{email}","password":"integration-test-pw"}}"#
        );
        let (status, json) = self.request("POST", "/register", Some(&body), None).await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {json}");
        json["user"]["token"].as_str().unwrap().to_string()
    }

    /// Create a job for the given token, returning the job id
    pub async fn create_job(&self, token: &str, company: &str, status: &str) -> String {
        let body = format!(
            r#"{{"company":"{company}","position":"Engineer","status":"{status}"}}"#
        );
        let (http_status, json) = self
            .request("POST", "/jobs", Some(&body), Some(token))
            .await;
        assert_eq!(http_status, StatusCode::CREATED, "create job failed: {json}");
        json["job"]["id"].as_str().unwrap().to_string()
    }
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    if let Ok(url) = std::env::var("TEST_DATABASE_URL") {
        config.database.url = url;
    }
    config
}

/// A random email so repeated runs do not collide on uniqueness
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", uuid::Uuid::new_v4())
}
