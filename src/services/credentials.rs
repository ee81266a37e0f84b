//! Credential store: normalized, hashed identity records with unique emails.

use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::auth::hash_password_blocking;
use crate::db::DbPool;
use crate::error::{AppError, AppResult};
use crate::models::{normalize_email, Identity};
use crate::repositories::{IdentityRepository, MemoryIdentityRepository, PgIdentityRepository};

#[derive(Clone)]
pub struct CredentialStore {
    repo: Arc<dyn IdentityRepository>,
}

impl CredentialStore {
    pub fn new(repo: Arc<dyn IdentityRepository>) -> Self {
        Self { repo }
    }

    pub fn postgres(pool: DbPool) -> Self {
        Self::new(Arc::new(PgIdentityRepository::new(pool)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryIdentityRepository::new()))
    }

    /// Hash `password` and persist a new identity under the normalized email.
    ///
    /// The early lookup only skips hashing for obvious duplicates; the repository's
    /// uniqueness check is what decides concurrent registrations.
    #[instrument(skip(self, password))]
    pub async fn create(&self, email: &str, password: &str) -> AppResult<Identity> {
        let email = normalize_email(email);
        if self.repo.find_by_email(&email).await?.is_some() {
            debug!(email = %email, "identity already exists");
            return Err(AppError::DuplicateIdentity);
        }

        let password_hash = hash_password_blocking(password).await?;
        let identity = self.repo.insert(Identity::new(&email, password_hash)).await?;
        debug!(identity_id = %identity.id, "identity created");
        Ok(identity)
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Identity>> {
        self.repo.find_by_email(&normalize_email(email)).await
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>> {
        self.repo.find_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_password;

    #[tokio::test]
    async fn create_hashes_password() {
        let store = CredentialStore::in_memory();
        let identity = store.create("frank@example.com", "password123").await.unwrap();
        assert!(!identity.password_hash.is_empty());
        assert_ne!(identity.password_hash, "password123");
        assert!(verify_password("password123", &identity.password_hash).unwrap());
    }

    #[tokio::test]
    async fn same_email_different_case_is_duplicate() {
        let store = CredentialStore::in_memory();
        store.create("A@B.com", "password123").await.unwrap();
        let err = store.create("a@b.com ", "password456").await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateIdentity));
    }

    #[tokio::test]
    async fn concurrent_creates_yield_one_success() {
        let store = CredentialStore::in_memory();
        let (first, second) = tokio::join!(
            store.create("race@example.com", "password123"),
            store.create("RACE@example.com", "password123"),
        );
        let successes = [first.is_ok(), second.is_ok()]
            .iter()
            .filter(|ok| **ok)
            .count();
        assert_eq!(successes, 1);
        let failure = first.err().or(second.err()).unwrap();
        assert!(matches!(failure, AppError::DuplicateIdentity));
    }

    #[tokio::test]
    async fn same_password_different_hashes() {
        let store = CredentialStore::in_memory();
        let one = store.create("user1@x.com", "secret123").await.unwrap();
        let two = store.create("user2@x.com", "secret123").await.unwrap();
        assert_ne!(one.password_hash, two.password_hash);
    }

    #[tokio::test]
    async fn find_by_email_is_normalized() {
        let store = CredentialStore::in_memory();
        let created = store.create("grace@example.com", "password123").await.unwrap();
        let found = store.find_by_email("  GRACE@Example.com").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.created_at, created.created_at);
        assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
    }
}
