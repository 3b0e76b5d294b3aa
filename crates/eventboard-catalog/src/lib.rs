//! Eventboard — Event Catalog bounded context.
//!
//! Responsible for browsing and searching events, event detail, and
//! registering attendees.

pub mod application;
pub mod domain;
