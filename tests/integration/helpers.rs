//! Shared test helpers for integration tests.
//!
//! Requires a PostgreSQL database reachable via the `test` configuration
//! overlay (`config/test.toml`) or `HAILHUB__DATABASE__URL`.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use hailhub_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = hailhub_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database")
            .into_pool();

        hailhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let rider_repo = Arc::new(hailhub_database::repositories::RiderRepository::new(
            db_pool.clone(),
        ));
        let driver_repo = Arc::new(hailhub_database::repositories::DriverRepository::new(
            db_pool.clone(),
        ));
        let revocation_repo = Arc::new(hailhub_database::repositories::RevocationRepository::new(
            db_pool.clone(),
        ));

        let password_hasher = Arc::new(hailhub_auth::password::PasswordHasher::new());
        let token_issuer = Arc::new(hailhub_auth::token::TokenIssuer::new(&config.auth));
        let token_verifier = Arc::new(hailhub_auth::token::TokenVerifier::new(&config.auth));
        let revocation_ledger = Arc::new(hailhub_auth::revocation::RevocationLedger::new(
            Arc::clone(&revocation_repo),
            &config.auth,
        ));

        let rider_service = Arc::new(hailhub_service::rider::RiderService::new(
            Arc::clone(&rider_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_issuer),
            Arc::clone(&revocation_ledger),
        ));
        let driver_service = Arc::new(hailhub_service::driver::DriverService::new(
            Arc::clone(&driver_repo),
            Arc::clone(&password_hasher),
            Arc::clone(&token_issuer),
            Arc::clone(&revocation_ledger),
        ));

        let app_state = hailhub_api::state::AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            password_hasher,
            token_issuer,
            token_verifier,
            revocation_ledger,
            rider_repo,
            driver_repo,
            rider_service,
            driver_service,
        };

        let router = hailhub_api::router::build_router(app_state);

        Self {
            router,
            db_pool,
            config,
        }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        for table in ["revoked_tokens", "drivers", "riders"] {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    /// Register a rider and return the bearer token
    pub async fn register_rider(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/riders/register",
                Some(serde_json::json!({
                    "first_name": "Test",
                    "last_name": "Rider",
                    "email": email,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Rider registration failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in registration response")
            .to_string()
    }

    /// Register a driver and return the bearer token
    pub async fn register_driver(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/drivers/register",
                Some(driver_payload(email, password)),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Driver registration failed: {:?}",
            response.body
        );

        response.body["data"]["token"]
            .as_str()
            .expect("No token in registration response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// A complete, valid driver registration body
pub fn driver_payload(email: &str, password: &str) -> Value {
    serde_json::json!({
        "first_name": "Test",
        "last_name": "Driver",
        "email": email,
        "password": password,
        "vehicle": {
            "color": "black",
            "plate": "KA-01-1234",
            "capacity": 4,
            "vehicle_type": "car",
        },
        "location": {
            "lat": 12.97,
            "lng": 77.59,
        },
    })
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
