//! Signed bearer token creation and validation.

pub mod claims;
pub mod issuer;
pub mod verifier;

pub use claims::{Claims, PrincipalKind};
pub use issuer::{IssuedToken, TokenIssuer};
pub use verifier::TokenVerifier;
