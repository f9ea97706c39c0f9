//! Token revocation entity.

pub mod model;

pub use model::RevokedToken;
