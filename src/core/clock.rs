//! Injectable "current time" source.
//!
//! Engines never read the wall clock themselves. Callers read a [`Clock`]
//! once per pass and hand the derived day/hour to the engines, so a single
//! pass can never straddle local midnight.

use chrono::{Local, NaiveDateTime};

/// Source of the current local wall-clock time.
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    /// Current local date and time.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock in the local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
