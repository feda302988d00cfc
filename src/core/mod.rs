//! Core abstractions for tasklens.
//!
//! This module provides the time source, calendar helpers and the task
//! filter engine.

mod clock;
mod datetime;
pub mod filter;
mod traits;

#[cfg(test)]
pub use clock::MockClock;
pub use clock::{Clock, FixedClock, SystemClock};
pub use datetime::{end_of_week, parse_date, parse_deadline, parse_deadline_arg};
pub use filter::{filter_tasks, DateRange, FilterMode};
pub use traits::Schedulable;
