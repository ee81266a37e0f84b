//! Repositories: identities (one row per normalized email).

use crate::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::DbPool;

// ---- Identity ----

#[derive(Debug, Clone, FromRow)]
pub struct IdentityRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Insert a new identity. The unique index on `email` decides races between
/// concurrent registrations: the loser gets `DuplicateIdentity`.
pub async fn identity_insert(
    pool: &DbPool,
    id: Uuid,
    email: &str,
    password_hash: &str,
    created_at: DateTime<Utc>,
) -> AppResult<IdentityRow> {
    let row = sqlx::query_as::<_, IdentityRow>(
        r#"
        INSERT INTO identities (id, email, password_hash, created_at)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (email) DO NOTHING
        RETURNING id, email, password_hash, created_at
        "#,
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(created_at)
    .fetch_optional(pool)
    .await;

    match row {
        Ok(Some(row)) => Ok(row),
        Ok(None) => Err(AppError::DuplicateIdentity),
        Err(err) if is_unique_violation(&err) => Err(AppError::DuplicateIdentity),
        Err(err) => Err(err.into()),
    }
}

pub async fn identity_find_by_email(pool: &DbPool, email: &str) -> AppResult<Option<IdentityRow>> {
    let row = sqlx::query_as::<_, IdentityRow>(
        "SELECT id, email, password_hash, created_at FROM identities WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn identity_get_by_id(pool: &DbPool, id: Uuid) -> AppResult<Option<IdentityRow>> {
    let row = sqlx::query_as::<_, IdentityRow>(
        "SELECT id, email, password_hash, created_at FROM identities WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::error::{DatabaseError, ErrorKind};
    use std::borrow::Cow;
    use std::error::Error as StdError;
    use std::fmt;

    #[derive(Debug)]
    struct FakePgError {
        code: Option<&'static str>,
    }

    impl fmt::Display for FakePgError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "fake postgres error")
        }
    }

    impl StdError for FakePgError {}

    impl DatabaseError for FakePgError {
        fn message(&self) -> &str {
            "fake postgres error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            self.code.map(Cow::Borrowed)
        }

        fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn StdError + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn StdError + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> ErrorKind {
            ErrorKind::Other
        }
    }

    #[test]
    fn sqlstate_23505_is_unique_violation() {
        let err = sqlx::Error::Database(Box::new(FakePgError {
            code: Some("23505"),
        }));
        assert!(is_unique_violation(&err));

        let err = sqlx::Error::Database(Box::new(FakePgError {
            code: Some("23503"),
        }));
        assert!(!is_unique_violation(&err));

        let err = sqlx::Error::Database(Box::new(FakePgError { code: None }));
        assert!(!is_unique_violation(&err));
    }

    #[test]
    fn non_database_errors_are_not_unique_violations() {
        assert!(!is_unique_violation(&sqlx::Error::RowNotFound));
        assert!(!is_unique_violation(&sqlx::Error::PoolTimedOut));
    }
}
