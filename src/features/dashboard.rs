//! Home dashboard view state.
//!
//! Ties the filter and statistics engines to a single reading of the clock.
//! The two engines stay independent: the filter sees the selected mode, the
//! statistics always see the full collection.

use chrono::{NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

use crate::core::{filter_tasks, Clock, FilterMode, Schedulable};
use crate::features::stats::{
    completion_tier, compute_statistics, time_greeting, CompletionTier, Greeting, TaskStatistics,
};

/// Everything the home screen renders, derived from one instant.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard<'a, T> {
    /// The instant this view was computed for.
    pub now: NaiveDateTime,
    pub mode: FilterMode,
    pub greeting: Greeting,
    /// Tasks matching `mode`, in collection order.
    pub visible: Vec<&'a T>,
    /// Statistics over the whole collection.
    pub stats: TaskStatistics<'a, T>,
    pub completion: CompletionTier,
}

impl<'a, T: Schedulable> Dashboard<'a, T> {
    /// Build the dashboard, reading `clock` exactly once.
    pub fn observe(
        tasks: &'a [T],
        mode: &FilterMode,
        clock: &dyn Clock,
        week_start: Weekday,
    ) -> Self {
        Self::at(tasks, mode, clock.now(), week_start)
    }

    /// Build the dashboard for a given instant.
    pub fn at(tasks: &'a [T], mode: &FilterMode, now: NaiveDateTime, week_start: Weekday) -> Self {
        let today = now.date();
        let stats = compute_statistics(tasks, today);
        let completion = completion_tier(stats.completed_percentage, stats.total_count);

        Self {
            now,
            mode: *mode,
            greeting: time_greeting(now.hour()),
            visible: filter_tasks(tasks, mode, today, week_start),
            stats,
            completion,
        }
    }
}
