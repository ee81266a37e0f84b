//! Session token issue and validation (HS256 JWT).

use crate::error::{AppError, AppResult};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validity window of every session token.
pub const TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // identity id
    pub exp: i64,
    pub iat: i64,
}

/// Signed token plus what it carries, so callers need not decode it.
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub token: String,
    pub identity_id: Uuid,
    pub expires_at: DateTime<Utc>,
}

/// Process-wide signing secret; the same key signs and verifies.
#[derive(Clone)]
pub struct JwtSecret {
    secret: String,
}

impl JwtSecret {
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    pub fn issue(&self, identity_id: Uuid) -> AppResult<SessionToken> {
        self.issue_at(identity_id, Utc::now())
    }

    pub(crate) fn issue_at(&self, identity_id: Uuid, now: DateTime<Utc>) -> AppResult<SessionToken> {
        let expires_at = now + Duration::seconds(TOKEN_TTL_SECS);
        let claims = Claims {
            sub: identity_id.to_string(),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("sign token: {}", e)))?;
        Ok(SessionToken {
            token,
            identity_id,
            expires_at,
        })
    }

    pub fn validate(&self, token: &str) -> AppResult<Uuid> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AppError::TokenExpired,
            _ => AppError::TokenInvalid(e.to_string()),
        })?;
        let id = Uuid::parse_str(&data.claims.sub)
            .map_err(|e| AppError::TokenInvalid(e.to_string()))?;
        Ok(id)
    }
}
