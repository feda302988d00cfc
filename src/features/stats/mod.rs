//! Statistics module.
//!
//! Provides progress numbers and summary text for the dashboard:
//! - Completed count and completion percentage
//! - Open tasks due today
//! - Completion message tiers
//! - Time-of-day greeting

pub mod snapshot;
pub mod tiers;

pub use snapshot::{completion_percentage, compute_statistics, TaskStatistics};
pub use tiers::{completion_message, completion_tier, time_greeting, CompletionTier, Greeting};
