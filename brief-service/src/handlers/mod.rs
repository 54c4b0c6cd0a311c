//! HTTP handlers for the brief service.

pub mod gate;
pub mod generate;
pub mod health;
pub mod metrics;
