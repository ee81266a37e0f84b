//! Authentication: password hashing, session tokens, HTTP handlers.

mod handlers;
mod jwt;
mod password;
mod validation;

pub use handlers::{login, me, signup, AuthRequest, AuthResponse};
pub use jwt::{Claims, JwtSecret, SessionToken, TOKEN_TTL_SECS};
pub use password::{
    dummy_hash, hash_password, hash_password_blocking, verify_password, verify_password_blocking,
};
pub use validation::NewCredentials;
