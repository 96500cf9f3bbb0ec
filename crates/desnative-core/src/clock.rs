//! Clock abstraction for history file naming.
//!
//! History file names carry local wall-clock time, so the trait hands out a
//! `NaiveDateTime` rather than an instant.

use chrono::{DateTime, Local, NaiveDateTime};
use std::sync::atomic::{AtomicI64, Ordering};

pub trait Clock: Send + Sync {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Real local-time clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Deterministic clock for tests and scripted runs.
///
/// Holds a wall-clock reading that only moves when [`FixedClock::advance`]
/// is called.
#[derive(Debug)]
pub struct FixedClock {
    secs: AtomicI64,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { secs: AtomicI64::new(at.and_utc().timestamp()) }
    }

    /// Move the clock forward by `secs` seconds.
    pub fn advance(&self, secs: i64) {
        self.secs.fetch_add(secs, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        let secs = self.secs.load(Ordering::SeqCst);
        DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.naive_utc())
            .unwrap_or_default()
    }
}
