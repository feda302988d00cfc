//! Filter engine for the task list.
//!
//! Selects the tasks shown for a filter mode:
//!
//! - `All` - every task, in input order
//! - `Today` - deadline on the current calendar day
//! - `ThisWeek` - deadline between today and the end of the current week
//! - `Custom` - deadline within an inclusive `[start, end]` day range
//!
//! Tasks without a deadline only ever appear under `All` (or an incomplete
//! custom range, which does not filter at all).

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::core::{end_of_week, Schedulable};

/// Inclusive calendar-day range for custom filtering.
///
/// Either bound may be unset while the user is still picking dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    #[must_use]
    pub const fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Range covering a single day.
    #[must_use]
    pub const fn day(day: NaiveDate) -> Self {
        Self::new(Some(day), Some(day))
    }

    /// Both bounds set, so the range actually filters.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Both bounds set with start after end. Such a range matches nothing;
    /// callers are expected to tell the user.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(s), Some(e)) if s > e)
    }
}

/// Which tasks the list shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "mode")]
pub enum FilterMode {
    #[default]
    All,
    Today,
    #[serde(rename = "week")]
    ThisWeek,
    Custom(DateRange),
}

impl FilterMode {
    /// Short label used for headings.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => "All Tasks",
            Self::Today => "Today",
            Self::ThisWeek => "This Week",
            Self::Custom(_) => "Custom Range",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Today => write!(f, "today"),
            Self::ThisWeek => write!(f, "week"),
            Self::Custom(range) => {
                let show = |d: Option<NaiveDate>| d.map_or_else(|| "?".to_string(), |d| d.to_string());
                write!(f, "custom {}..{}", show(range.start), show(range.end))
            },
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    /// Parse a mode name. `custom` yields an empty range for the caller to fill.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "today" => Ok(Self::Today),
            "week" | "this-week" | "thisweek" => Ok(Self::ThisWeek),
            "custom" => Ok(Self::Custom(DateRange::default())),
            other => Err(format!("unknown filter mode '{other}'")),
        }
    }
}

/// Apply a filter mode to a task collection.
///
/// `today` is read once by the caller and used as the day boundary for the
/// whole pass. `week_start` fixes which weekday a week begins on. Order of
/// the input is preserved in every mode.
pub fn filter_tasks<'a, T: Schedulable>(
    tasks: &'a [T],
    mode: &FilterMode,
    today: NaiveDate,
    week_start: Weekday,
) -> Vec<&'a T> {
    let selected: Vec<&T> = match mode {
        FilterMode::All => tasks.iter().collect(),
        FilterMode::Today => tasks.iter().filter(|t| t.is_due_on(today)).collect(),
        FilterMode::ThisWeek => {
            let end = end_of_week(today, week_start);
            tasks
                .iter()
                .filter(|t| t.is_due_between(today, end))
                .collect()
        },
        FilterMode::Custom(DateRange {
            start: Some(start),
            end: Some(end),
        }) => tasks
            .iter()
            .filter(|t| t.is_due_between(*start, *end))
            .collect(),
        FilterMode::Custom(_) => tasks.iter().collect(),
    };

    tracing::debug!(
        mode = %mode,
        %today,
        total = tasks.len(),
        selected = selected.len(),
        "filtered tasks"
    );

    selected
}
