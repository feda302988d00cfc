//! Aggregate counts over the full task collection.

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::Schedulable;

/// Progress numbers derived from a task collection.
///
/// Recomputed on every change to the collection and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStatistics<'a, T> {
    /// Number of done tasks.
    pub completed_count: usize,
    /// Number of tasks.
    pub total_count: usize,
    /// `completed_count / total_count * 100`, or 0 with no tasks.
    pub completed_percentage: f64,
    /// Open tasks whose deadline falls on `today`.
    pub due_today: Vec<&'a T>,
}

impl<T> TaskStatistics<'_, T> {
    /// Tasks not yet done.
    #[must_use]
    pub const fn open_count(&self) -> usize {
        self.total_count - self.completed_count
    }
}

/// Compute statistics for `tasks` as of the calendar day `today`.
///
/// `today` is fixed for the whole pass so every task is classified against
/// the same day.
pub fn compute_statistics<T: Schedulable>(tasks: &[T], today: NaiveDate) -> TaskStatistics<'_, T> {
    let total_count = tasks.len();
    let completed_count = tasks.iter().filter(|t| t.is_done()).count();
    let due_today: Vec<&T> = tasks
        .iter()
        .filter(|t| !t.is_done() && t.is_due_on(today))
        .collect();

    let stats = TaskStatistics {
        completed_count,
        total_count,
        completed_percentage: completion_percentage(completed_count, total_count),
        due_today,
    };

    tracing::debug!(
        %today,
        total = stats.total_count,
        completed = stats.completed_count,
        due_today = stats.due_today.len(),
        "computed task statistics"
    );

    stats
}

/// Percentage of `completed` in `total`, 0 when `total` is 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn completion_percentage(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::Task;
    use chrono::{Duration, NaiveDateTime};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 12).unwrap()
    }

    fn make_task(id: &str, deadline: Option<NaiveDateTime>, done: bool) -> Task {
        let mut task = Task::new(id, format!("Task {id}"));
        task.deadline = deadline;
        task.done = done;
        task
    }

    #[test]
    fn test_empty_collection() {
        let tasks: Vec<Task> = Vec::new();
        let stats = compute_statistics(&tasks, today());
        assert_eq!(stats.total_count, 0);
        assert_eq!(stats.completed_count, 0);
        assert!(stats.completed_percentage.abs() < f64::EPSILON);
        assert!(stats.due_today.is_empty());
    }

    #[test]
    fn test_all_done_is_one_hundred_percent() {
        let tasks = vec![
            make_task("a", None, true),
            make_task("b", today().and_hms_opt(9, 0, 0), true),
            make_task("c", None, true),
        ];
        let stats = compute_statistics(&tasks, today());
        assert!((stats.completed_percentage - 100.0).abs() < f64::EPSILON);
        assert_eq!(stats.open_count(), 0);
        assert!(stats.due_today.is_empty());
    }

    #[test]
    fn test_half_done_with_one_due_today() {
        let tasks = vec![
            make_task("first", today().and_hms_opt(17, 30, 0), false),
            make_task(
                "second",
                (today() + Duration::days(10)).and_hms_opt(9, 0, 0),
                true,
            ),
        ];
        let stats = compute_statistics(&tasks, today());
        assert_eq!(stats.completed_count, 1);
        assert_eq!(stats.total_count, 2);
        assert!((stats.completed_percentage - 50.0).abs() < f64::EPSILON);
        assert_eq!(stats.due_today.len(), 1);
        assert_eq!(stats.due_today[0].id, "first");
    }

    #[test]
    fn test_due_today_skips_done_and_other_days() {
        let tasks = vec![
            make_task("done today", today().and_hms_opt(8, 0, 0), true),
            make_task("open tomorrow", (today() + Duration::days(1)).and_hms_opt(0, 0, 0), false),
            make_task("open yesterday", (today() - Duration::days(1)).and_hms_opt(23, 59, 0), false),
            make_task("no deadline", None, false),
            make_task("open today", today().and_hms_opt(0, 0, 0), false),
        ];
        let stats = compute_statistics(&tasks, today());
        let ids: Vec<&str> = stats.due_today.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["open today"]);
    }

    #[test]
    fn test_completion_percentage_fractions() {
        let third = completion_percentage(1, 3);
        assert!((third - 100.0 / 3.0).abs() < 1e-9);
        assert!(completion_percentage(0, 0).abs() < f64::EPSILON);
        assert!(completion_percentage(0, 5).abs() < f64::EPSILON);
    }
}
