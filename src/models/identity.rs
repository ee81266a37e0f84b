//! Identity record and email normalization.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::db::IdentityRow;

/// Canonical form of an email address: surrounding whitespace removed, lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// A registered email/password credential. `email` is always normalized.
#[derive(Debug, Clone)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// Build a fresh record; caller supplies an already-hashed password.
    pub fn new(email: &str, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: normalize_email(email),
            password_hash,
            created_at: Utc::now(),
        }
    }

    pub fn profile(&self) -> IdentityProfile {
        IdentityProfile {
            id: self.id,
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

impl From<IdentityRow> for Identity {
    fn from(row: IdentityRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            created_at: row.created_at,
        }
    }
}

/// Public view of an identity (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct IdentityProfile {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
