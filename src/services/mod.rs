//! Business logic: credential storage and session-token authentication.

pub mod auth;
pub mod credentials;

pub use auth::AuthService;
pub use credentials::CredentialStore;
