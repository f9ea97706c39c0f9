//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use hailhub_auth::password::PasswordHasher;
use hailhub_auth::revocation::RevocationLedger;
use hailhub_auth::token::{TokenIssuer, TokenVerifier};
use hailhub_core::config::AppConfig;
use hailhub_database::repositories::{DriverRepository, RiderRepository};
use hailhub_service::driver::DriverService;
use hailhub_service::rider::RiderService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Credential core ──────────────────────────────────────
    /// Password hasher (Argon2id)
    pub password_hasher: Arc<PasswordHasher>,
    /// Bearer token issuer
    pub token_issuer: Arc<TokenIssuer>,
    /// Bearer token verifier
    pub token_verifier: Arc<TokenVerifier>,
    /// Token revocation ledger
    pub revocation_ledger: Arc<RevocationLedger>,

    // ── Repositories ─────────────────────────────────────────
    /// Rider repository
    pub rider_repo: Arc<RiderRepository>,
    /// Driver repository
    pub driver_repo: Arc<DriverRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Rider account flows
    pub rider_service: Arc<RiderService>,
    /// Driver account flows
    pub driver_service: Arc<DriverService>,
}
