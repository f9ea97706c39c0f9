//! Database-backed revocation ledger with an in-memory fast path.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use tracing::info;

use hailhub_core::config::AuthConfig;
use hailhub_core::result::AppResult;
use hailhub_database::repositories::RevocationRepository;

/// Maximum number of revoked tokens held in the in-memory fast path.
const CACHE_CAPACITY: u64 = 100_000;

/// Records revoked bearer tokens and answers membership checks.
///
/// The database table is the source of truth and is insert-only; the moka
/// cache only holds confirmed-revoked tokens so a hit can short-circuit the
/// lookup. Cached entries outlive the token TTL by an hour, after which the
/// token is expired anyway and the entry is inert.
#[derive(Clone)]
pub struct RevocationLedger {
    /// Persistent ledger rows.
    repo: Arc<RevocationRepository>,
    /// Confirmed-revoked tokens.
    revoked: Cache<String, ()>,
}

impl std::fmt::Debug for RevocationLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevocationLedger")
            .field("cached", &self.revoked.entry_count())
            .finish()
    }
}

impl RevocationLedger {
    /// Creates a new ledger over the given repository.
    pub fn new(repo: Arc<RevocationRepository>, config: &AuthConfig) -> Self {
        let revoked = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(Duration::from_secs((config.jwt_ttl_hours + 1) * 3600))
            .build();

        Self { repo, revoked }
    }

    /// Records the token as revoked. Idempotent: revoking an
    /// already-revoked token succeeds silently.
    pub async fn revoke(&self, token: &str) -> AppResult<()> {
        self.repo.insert(token).await?;
        self.revoked.insert(token.to_string(), ()).await;
        info!("Token revoked");
        Ok(())
    }

    /// Membership test. Authoritative even for a structurally valid,
    /// unexpired token.
    pub async fn is_revoked(&self, token: &str) -> AppResult<bool> {
        if self.revoked.contains_key(token) {
            return Ok(true);
        }

        let revoked = self.repo.exists(token).await?;
        if revoked {
            self.revoked.insert(token.to_string(), ()).await;
        }
        Ok(revoked)
    }
}
