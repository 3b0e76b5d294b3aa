//! Domain layer: commands and listing criteria.

pub mod commands;
pub mod listing;
