//! Auth extractor: identity behind a bearer session token.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tracing::debug;

use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::models::Identity;

/// Extractor: identity resolved from `Authorization: Bearer <token>`.
#[derive(Clone, Debug)]
pub struct AuthIdentity(pub Identity);

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthIdentity {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|e| {
                    debug!(error = %e, "rejected request: missing bearer token");
                    AppError::TokenInvalid("missing or invalid Authorization header".to_string())
                })?;
        let identity = state.auth_service().identity_for_token(bearer.token()).await?;
        Ok(AuthIdentity(identity))
    }
}
