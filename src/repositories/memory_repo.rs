//! In-process identity repository for tests and database-less runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::IdentityRepository;
use crate::error::{AppError, AppResult};
use crate::models::Identity;

/// Identities keyed by normalized email. The write lock makes check-and-insert atomic.
#[derive(Clone, Default)]
pub struct MemoryIdentityRepository {
    by_email: Arc<RwLock<HashMap<String, Identity>>>,
}

impl MemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.by_email.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.by_email.read().await.is_empty()
    }
}

#[async_trait]
impl IdentityRepository for MemoryIdentityRepository {
    async fn insert(&self, identity: Identity) -> AppResult<Identity> {
        let mut map = self.by_email.write().await;
        if map.contains_key(&identity.email) {
            return Err(AppError::DuplicateIdentity);
        }
        map.insert(identity.email.clone(), identity.clone());
        Ok(identity)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Identity>> {
        Ok(self.by_email.read().await.get(email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Identity>> {
        Ok(self
            .by_email
            .read()
            .await
            .values()
            .find(|identity| identity.id == id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_then_find() {
        let repo = MemoryIdentityRepository::new();
        let identity = Identity::new("erin@example.com", "$argon2id$stub".to_string());
        let id = identity.id;
        repo.insert(identity).await.unwrap();

        let by_email = repo.find_by_email("erin@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, id);
        let by_id = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "erin@example.com");
        assert!(repo.find_by_email("nobody@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_email_rejected() {
        let repo = MemoryIdentityRepository::new();
        repo.insert(Identity::new("a@b.com", "h1".to_string()))
            .await
            .unwrap();
        let err = repo
            .insert(Identity::new("a@b.com", "h2".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::DuplicateIdentity));
        assert_eq!(repo.len().await, 1);
    }
}
