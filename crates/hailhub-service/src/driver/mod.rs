//! Driver account flows.

pub mod service;

pub use service::{AuthenticatedDriver, DriverService, NewDriver};
