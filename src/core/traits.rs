//! Shared traits for schedulable items.

use chrono::{NaiveDate, NaiveDateTime};

/// Trait for items with an optional deadline and a completion flag.
///
/// All day checks compare calendar days: a deadline at any time of a day is
/// "on" that day. Callers pass the reference day in, nothing here reads the
/// clock.
pub trait Schedulable {
    /// Get the deadline, in local wall-clock time.
    fn deadline(&self) -> Option<NaiveDateTime>;

    /// Whether the item is completed.
    fn is_done(&self) -> bool;

    /// Calendar day of the deadline.
    fn deadline_day(&self) -> Option<NaiveDate> {
        self.deadline().map(|dt| dt.date())
    }

    /// Check if the deadline falls on `day`.
    fn is_due_on(&self, day: NaiveDate) -> bool {
        self.deadline_day() == Some(day)
    }

    /// Check if the deadline falls within `[start, end]`, both inclusive.
    ///
    /// Always false when `start` is after `end`.
    fn is_due_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.deadline_day().is_some_and(|d| start <= d && d <= end)
    }

    /// Check if this item is open and past its deadline.
    fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.is_done() && self.deadline().is_some_and(|d| d < now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item {
        deadline: Option<NaiveDateTime>,
        done: bool,
    }

    impl Schedulable for Item {
        fn deadline(&self) -> Option<NaiveDateTime> {
            self.deadline
        }

        fn is_done(&self) -> bool {
            self.done
        }
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_due_on_ignores_time_of_day() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        for (h, m) in [(0, 0), (12, 0), (23, 59)] {
            let item = Item { deadline: Some(at(2024, 6, 12, h, m)), done: false };
            assert!(item.is_due_on(day));
        }
        let tomorrow = Item { deadline: Some(at(2024, 6, 13, 0, 0)), done: false };
        assert!(!tomorrow.is_due_on(day));
        let none = Item { deadline: None, done: false };
        assert!(!none.is_due_on(day));
    }

    #[test]
    fn test_due_between_is_inclusive() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let first = Item { deadline: Some(at(2024, 6, 10, 0, 0)), done: false };
        let last = Item { deadline: Some(at(2024, 6, 14, 23, 59)), done: false };
        let after = Item { deadline: Some(at(2024, 6, 15, 0, 0)), done: false };

        assert!(first.is_due_between(start, end));
        assert!(last.is_due_between(start, end));
        assert!(!after.is_due_between(start, end));
        assert!(!first.is_due_between(end, start));
    }

    #[test]
    fn test_overdue() {
        let now = at(2024, 6, 12, 10, 0);
        let past = Item { deadline: Some(at(2024, 6, 12, 9, 0)), done: false };
        let past_done = Item { deadline: Some(at(2024, 6, 12, 9, 0)), done: true };
        let later = Item { deadline: Some(at(2024, 6, 12, 11, 0)), done: false };

        assert!(past.is_overdue(now));
        assert!(!past_done.is_overdue(now));
        assert!(!later.is_overdue(now));
    }
}
