//! Rider repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hailhub_core::error::{AppError, ErrorKind};
use hailhub_core::result::AppResult;
use hailhub_entity::rider::{CreateRider, Rider};

/// Repository for rider account rows.
#[derive(Debug, Clone)]
pub struct RiderRepository {
    pool: PgPool,
}

impl RiderRepository {
    /// Create a new rider repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a rider by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Rider>> {
        sqlx::query_as::<_, Rider>("SELECT * FROM riders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find rider by id", e)
            })
    }

    /// Find a rider by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Rider>> {
        sqlx::query_as::<_, Rider>("SELECT * FROM riders WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find rider by email", e)
            })
    }

    /// Create a new rider. Email is lowercased on write.
    ///
    /// The unique index on email is the backstop behind the service layer's
    /// check-then-create; a violation surfaces as a conflict.
    pub async fn create(&self, data: &CreateRider) -> AppResult<Rider> {
        sqlx::query_as::<_, Rider>(
            "INSERT INTO riders (first_name, last_name, email, password_hash, phone) \
             VALUES ($1, $2, LOWER($3), $4, $5) \
             RETURNING *",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("riders_email_key") => {
                AppError::conflict("Rider already registered with this email")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create rider", e),
        })
    }
}
