//! Rider account flows.

pub mod service;

pub use service::{AuthenticatedRider, NewRider, RiderService};
