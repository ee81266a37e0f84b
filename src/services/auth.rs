//! Register/authenticate over the credential store and issue session tokens.

use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::auth::{dummy_hash, verify_password_blocking, JwtSecret, NewCredentials, SessionToken};
use crate::error::{AppError, AppResult};
use crate::models::Identity;
use crate::services::CredentialStore;

/// Signs tokens with the injected secret; holds no other state.
#[derive(Clone)]
pub struct AuthService {
    store: CredentialStore,
    jwt_secret: JwtSecret,
}

impl AuthService {
    pub fn new(store: CredentialStore, jwt_secret: JwtSecret) -> Self {
        Self { store, jwt_secret }
    }

    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Create an identity and return a session token for it.
    #[instrument(skip(self, password))]
    pub async fn register(&self, email: &str, password: &str) -> AppResult<SessionToken> {
        let credentials = NewCredentials::new(email, password);
        credentials.check()?;

        let identity = self
            .store
            .create(&credentials.email, &credentials.password)
            .await?;
        info!(identity_id = %identity.id, email = %identity.email, "identity registered");
        self.issue_token(identity.id)
    }

    /// Unknown email and wrong password both fail with `InvalidCredentials`
    /// after the same amount of hashing work.
    #[instrument(skip(self, password))]
    pub async fn authenticate(&self, email: &str, password: &str) -> AppResult<SessionToken> {
        let Some(identity) = self.store.find_by_email(email).await? else {
            verify_password_blocking(password, dummy_hash()?).await?;
            debug!("login rejected");
            return Err(AppError::InvalidCredentials);
        };

        if !verify_password_blocking(password, &identity.password_hash).await? {
            debug!("login rejected");
            return Err(AppError::InvalidCredentials);
        }

        info!(identity_id = %identity.id, "identity authenticated");
        self.issue_token(identity.id)
    }

    /// Token carrying `identity_id`, valid for one hour from now.
    pub fn issue_token(&self, identity_id: Uuid) -> AppResult<SessionToken> {
        self.jwt_secret.issue(identity_id)
    }

    pub fn verify_token(&self, token: &str) -> AppResult<Uuid> {
        self.jwt_secret.validate(token)
    }

    /// Identity behind a verified token. A token for a vanished identity is invalid.
    pub async fn identity_for_token(&self, token: &str) -> AppResult<Identity> {
        let id = self.verify_token(token)?;
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::TokenInvalid("unknown identity".to_string()))
    }
}
