//! Eventboard — Analytics bounded context.
//!
//! Read-only aggregates for the admin dashboard: the most popular events and
//! recent daily registration activity.

pub mod application;
