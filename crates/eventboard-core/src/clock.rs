//! Injected source of "now".
//!
//! Registrations are stamped with [`Clock::now`], and the analytics
//! dashboard derives its seven-day daily-stats window from the same clock,
//! so tests pin both with a fixed instant.

use chrono::{DateTime, Utc};

/// Current UTC time as seen by registration and analytics.
pub trait Clock: Send + Sync {
    /// Returns the current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, used by the server and the seed binary.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
