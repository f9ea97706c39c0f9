//! Revoked token repository implementation.

use sqlx::PgPool;

use hailhub_core::error::{AppError, ErrorKind};
use hailhub_core::result::AppResult;

/// Repository for the revoked-token ledger rows.
///
/// Rows are insert-only; nothing in the application updates or deletes them.
#[derive(Debug, Clone)]
pub struct RevocationRepository {
    pool: PgPool,
}

impl RevocationRepository {
    /// Create a new revocation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a token as revoked. Idempotent: revoking an already-revoked
    /// token is a silent no-op.
    pub async fn insert(&self, token: &str) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO revoked_tokens (token, revoked_at) \
             VALUES ($1, NOW()) \
             ON CONFLICT (token) DO NOTHING",
        )
        .bind(token)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to revoke token", e))?;
        Ok(())
    }

    /// Membership test: has this exact token string been revoked?
    pub async fn exists(&self, token: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM revoked_tokens WHERE token = $1)",
        )
        .bind(token)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check token revocation", e)
        })
    }
}
