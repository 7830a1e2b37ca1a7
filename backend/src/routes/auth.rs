//! Authentication routes
//!
//! Registration, login, and profile updates. Register and login are the
//! only unauthenticated endpoints besides health checks.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use jobtrack_shared::types::{
    AuthResponse, LoginRequest, RegisterRequest, UpdateUserRequest, UpdateUserResponse,
};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/updateUser", post(update_user))
}

/// Register a new user
///
/// POST /register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let response = UserService::register(state.db(), state.jwt(), &req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Login with email and password
///
/// POST /login
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = UserService::login(state.db(), state.jwt(), &req).await?;
    Ok(Json(response))
}

/// Update the authenticated user's profile, reissuing a token
///
/// POST /updateUser
async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UpdateUserResponse>> {
    let response = UserService::update_user(state.db(), state.jwt(), auth.user_id, &req).await?;
    Ok(Json(response))
}
