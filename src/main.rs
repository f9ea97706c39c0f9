//! HailHub Server — Two-Sided Ride-Hailing Account Service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use hailhub_core::config::AppConfig;
use hailhub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("HAILHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting HailHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = hailhub_database::DatabasePool::connect(&config.database).await?;
    let db_pool = db.into_pool();

    hailhub_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize repositories ──────────────────────────
    let rider_repo = Arc::new(hailhub_database::repositories::RiderRepository::new(
        db_pool.clone(),
    ));
    let driver_repo = Arc::new(hailhub_database::repositories::DriverRepository::new(
        db_pool.clone(),
    ));
    let revocation_repo = Arc::new(hailhub_database::repositories::RevocationRepository::new(
        db_pool.clone(),
    ));

    // ── Step 3: Initialize the credential core ───────────────────
    tracing::info!("Initializing credential core...");
    let password_hasher = Arc::new(hailhub_auth::password::PasswordHasher::new());
    let token_issuer = Arc::new(hailhub_auth::token::TokenIssuer::new(&config.auth));
    let token_verifier = Arc::new(hailhub_auth::token::TokenVerifier::new(&config.auth));
    let revocation_ledger = Arc::new(hailhub_auth::revocation::RevocationLedger::new(
        Arc::clone(&revocation_repo),
        &config.auth,
    ));

    // ── Step 4: Initialize services ──────────────────────────────
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

    // ── Step 5: Build and start HTTP server ──────────────────────
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

    let app = hailhub_api::router::build_router(app_state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    tracing::info!("HailHub server listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("HailHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
