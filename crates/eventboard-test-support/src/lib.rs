//! Shared test doubles and utilities for the Eventboard service.

mod clock;
mod repository;
mod rng;

pub use clock::FixedClock;
pub use repository::{FailingRepository, InMemoryRepository};
pub use rng::{MockRng, SequenceRng};
