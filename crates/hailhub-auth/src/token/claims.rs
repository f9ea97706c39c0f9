//! Bearer token claims structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two authenticable identity kinds.
///
/// A token is bound to exactly one kind at issuance; an access guard for
/// one kind never accepts a token minted for the other, regardless of
/// whether the decoded id exists anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalKind {
    /// A passenger account.
    Rider,
    /// A driver account.
    Driver,
}

impl PrincipalKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rider => "rider",
            Self::Driver => "driver",
        }
    }
}

impl std::fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Claims payload embedded in every bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the principal ID.
    pub sub: Uuid,
    /// Which principal kind the token was minted for.
    pub kind: PrincipalKind,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the principal ID from the subject claim.
    pub fn principal_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serde_snake_case() {
        assert_eq!(serde_json::to_string(&PrincipalKind::Rider).unwrap(), "\"rider\"");
        assert_eq!(
            serde_json::from_str::<PrincipalKind>("\"driver\"").unwrap(),
            PrincipalKind::Driver
        );
    }

    #[test]
    fn test_expiry() {
        let now = Utc::now().timestamp();
        let live = Claims {
            sub: Uuid::new_v4(),
            kind: PrincipalKind::Rider,
            iat: now,
            exp: now + 3600,
        };
        let dead = Claims { exp: now - 1, ..live.clone() };
        assert!(!live.is_expired());
        assert!(dead.is_expired());
    }
}
