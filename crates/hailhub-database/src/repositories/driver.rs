//! Driver repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use hailhub_core::error::{AppError, ErrorKind};
use hailhub_core::result::AppResult;
use hailhub_entity::driver::{CreateDriver, Driver};

/// Repository for driver account rows.
#[derive(Debug, Clone)]
pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    /// Create a new driver repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a driver by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Driver>> {
        sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find driver by id", e)
            })
    }

    /// Find a driver by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Driver>> {
        sqlx::query_as::<_, Driver>("SELECT * FROM drivers WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find driver by email", e)
            })
    }

    /// Create a new driver. Email is lowercased on write.
    ///
    /// The unique index on email is the backstop behind the service layer's
    /// check-then-create; a violation surfaces as a conflict.
    pub async fn create(&self, data: &CreateDriver) -> AppResult<Driver> {
        sqlx::query_as::<_, Driver>(
            "INSERT INTO drivers \
             (first_name, last_name, email, password_hash, color, plate, capacity, vehicle_type, lat, lng) \
             VALUES ($1, $2, LOWER($3), $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(&data.first_name)
        .bind(&data.last_name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.vehicle.color)
        .bind(&data.vehicle.plate)
        .bind(data.vehicle.capacity)
        .bind(data.vehicle.vehicle_type)
        .bind(data.location.lat)
        .bind(data.location.lng)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("drivers_email_key") =>
            {
                AppError::conflict("Driver already registered with this email")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create driver", e),
        })
    }
}
