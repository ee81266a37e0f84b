//! Email/password credential store and session-token service backing the
//! stock quote client.
//!
//! Identities live in PostgreSQL (or in memory for tests); sessions are
//! stateless HS256 JWTs valid for one hour.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;
pub use services::{AuthService, CredentialStore};

use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use handlers::http;
use tower_http::cors::{Any, CorsLayer};

/// Build the API router (health, auth). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let auth_routes = axum::Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me));

    axum::Router::new()
        .route("/health", get(http::health))
        .nest("/api/auth", auth_routes)
        .with_state(state)
}

/// CORS for the browser client: a single origin when configured, otherwise any.
pub fn cors_layer(
    allow_origin: Option<&str>,
) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);
    Ok(match allow_origin {
        Some(origin) => layer.allow_origin(origin.parse::<HeaderValue>()?),
        None => layer.allow_origin(Any),
    })
}
