//! # hailhub-auth
//!
//! The credential core of HailHub: password hashing, bearer token issuance
//! and verification, and the token revocation ledger.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `token` — signed bearer token creation and validation
//! - `revocation` — logout blacklist with database persistence

pub mod password;
pub mod revocation;
pub mod token;

pub use password::PasswordHasher;
pub use revocation::RevocationLedger;
pub use token::{Claims, IssuedToken, PrincipalKind, TokenIssuer, TokenVerifier};
