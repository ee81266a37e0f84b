//! Request extractors guarding token-protected routes.

pub mod auth;

pub use auth::AuthIdentity;
