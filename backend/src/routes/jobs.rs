//! Job routes
//!
//! CRUD and statistics over the authenticated user's jobs. `/jobs/stats`
//! is registered as a static segment so it never collides with `/:id`.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::JobService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use jobtrack_shared::types::{
    CreateJobRequest, JobListResponse, JobResponse, StatsResponse, UpdateJobRequest,
};
use uuid::Uuid;

/// Create job routes
pub fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all_jobs).post(create_job))
        .route("/stats", get(show_stats))
        .route("/:id", get(get_job).patch(update_job).delete(delete_job))
}

/// GET /jobs - List the authenticated user's jobs, oldest first
async fn get_all_jobs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<JobListResponse>> {
    let response = JobService::get_all_jobs(state.db(), auth.user_id).await?;
    Ok(Json(response))
}

/// GET /jobs/:id - Fetch one job owned by the authenticated user
async fn get_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<JobResponse>> {
    let response = JobService::get_job(state.db(), auth.user_id, id).await?;
    Ok(Json(response))
}

/// POST /jobs - Create a job owned by the authenticated user
async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateJobRequest>,
) -> ApiResult<(StatusCode, Json<JobResponse>)> {
    let response = JobService::create_job(state.db(), auth.user_id, &req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PATCH /jobs/:id - Update a job owned by the authenticated user
async fn update_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJobRequest>,
) -> ApiResult<Json<JobResponse>> {
    let response = JobService::update_job(state.db(), auth.user_id, id, &req).await?;
    Ok(Json(response))
}

/// DELETE /jobs/:id - Hard-delete a job owned by the authenticated user
async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    JobService::delete_job(state.db(), auth.user_id, id).await?;
    Ok(StatusCode::OK)
}

/// GET /jobs/stats - Per-status counts and recent monthly buckets
async fn show_stats(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<StatsResponse>> {
    let response = JobService::show_stats(state.db(), auth.user_id).await?;
    Ok(Json(response))
}
