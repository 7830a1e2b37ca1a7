//! API request and response types
//!
//! Request fields that the service validates itself are `Option`, so a
//! missing field surfaces as a typed validation error rather than a
//! deserialization rejection.

use crate::models::{Job, JobStatus};
use serde::{Deserialize, Serialize};

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Profile update request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Authenticated user summary returned on register and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUserBody {
    pub name: String,
    pub token: String,
}

/// Register/login response envelope: `{ "user": { "name", "token" } }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: AuthUserBody,
}

/// User profile fields safe to return to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Profile update response: refreshed profile plus a reissued token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserResponse {
    pub user: UserProfile,
    pub token: String,
}

/// Job creation request
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CreateJobRequest {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub status: Option<JobStatus>,
}

/// Job update request
///
/// `company`/`position` present but empty is rejected; absent fields are
/// left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateJobRequest {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub status: Option<JobStatus>,
}

/// Single-job response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResponse {
    pub job: Job,
}

/// Job listing with count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub count: usize,
}

/// Per-status counts, zero-defaulted for every known status
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DefaultStats {
    pub pending: i64,
    pub interview: i64,
    pub declined: i64,
}

/// Applications submitted in one calendar month
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyApplications {
    /// Human-readable month label, e.g. "Mar 2026"
    pub date: String,
    pub count: i64,
}

/// Statistics response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub default_stats: DefaultStats,
    pub monthly_applications: Vec<MonthlyApplications>,
}
