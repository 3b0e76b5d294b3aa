//! Eventboard Core — shared domain model and abstractions.
//!
//! This crate defines the model types, error taxonomy and repository traits
//! that the catalog and analytics contexts depend on. It contains no
//! infrastructure code.

pub mod clock;
pub mod error;
pub mod model;
pub mod query;
pub mod repository;
pub mod rng;
