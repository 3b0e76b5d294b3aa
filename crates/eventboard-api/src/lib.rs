//! Eventboard API — axum HTTP surface, configuration and seeding.

pub mod config;
pub mod error;
pub mod routes;
pub mod seed;
pub mod state;
pub mod telemetry;
