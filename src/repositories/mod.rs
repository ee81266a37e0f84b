//! Identity storage backends behind a common trait.

mod memory_repo;
mod postgres_repo;

pub use memory_repo::MemoryIdentityRepository;
pub use postgres_repo::PgIdentityRepository;

use crate::error::AppResult;
use crate::models::Identity;
use async_trait::async_trait;
use uuid::Uuid;

/// Persistence for identity records.
///
/// Implementations enforce email uniqueness themselves: `insert` on an email
/// that is already stored fails with `AppError::DuplicateIdentity`, even when two
/// inserts race. Emails passed in are already normalized.
#[async_trait]
pub trait IdentityRepository: Send + Sync {
    async fn insert(&self, identity: Identity) -> AppResult<Identity>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Identity>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>>;
}
