//! Rider entity.

pub mod model;

pub use model::{CreateRider, Rider};
