//! PostgreSQL-backed identity repository.

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use super::IdentityRepository;
use crate::db::{self, DbPool};
use crate::error::AppResult;
use crate::models::Identity;

/// Identities stored in the `identities` table; uniqueness comes from its email index.
#[derive(Clone)]
pub struct PgIdentityRepository {
    pool: DbPool,
}

impl PgIdentityRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityRepository for PgIdentityRepository {
    async fn insert(&self, identity: Identity) -> AppResult<Identity> {
        let row = db::identity_insert(
            &self.pool,
            identity.id,
            &identity.email,
            &identity.password_hash,
            identity.created_at,
        )
        .await?;
        debug!(identity_id = %row.id, "identity row inserted");
        Ok(row.into())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Identity>> {
        Ok(db::identity_find_by_email(&self.pool, email)
            .await?
            .map(Identity::from))
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>> {
        Ok(db::identity_get_by_id(&self.pool, id).await?.map(Identity::from))
    }
}
