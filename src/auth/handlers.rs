//! Auth HTTP handlers: signup, login, me.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::middleware::AuthIdentity;
use crate::models::IdentityProfile;

#[derive(Debug, Deserialize)]
pub struct AuthRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
}

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let Json(body) = body?;
    let session = state.auth_service().register(&body.email, &body.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully!".to_string(),
            token: session.token,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<AuthRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(body) = body?;
    let session = state
        .auth_service()
        .authenticate(&body.email, &body.password)
        .await?;

    Ok(Json(AuthResponse {
        message: "Logged in successfully!".to_string(),
        token: session.token,
    }))
}

/// GET /api/auth/me (bearer token)
pub async fn me(AuthIdentity(identity): AuthIdentity) -> Json<IdentityProfile> {
    Json(identity.profile())
}
