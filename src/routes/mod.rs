//! Service-level route handlers

pub mod health;

pub use health::health;
