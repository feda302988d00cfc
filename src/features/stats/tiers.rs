//! Tiered summary text: completion messages and time-of-day greetings.
//!
//! Both are ordered tables scanned first-match-wins, so boundaries live in
//! one place.

use serde::Serialize;

/// Progress message tier for the completion summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionTier {
    NoTasks,
    AllDone,
    AlmostThere,
    Halfway,
    GoodProgress,
    JustStarted,
}

/// Minimum percentage for each tier above `JustStarted`, highest first.
const COMPLETION_TIERS: [(f64, CompletionTier); 4] = [
    (100.0, CompletionTier::AllDone),
    (75.0, CompletionTier::AlmostThere),
    (50.0, CompletionTier::Halfway),
    (25.0, CompletionTier::GoodProgress),
];

impl CompletionTier {
    /// User-facing message for this tier.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::NoTasks => "You don't have any tasks yet",
            Self::AllDone => "All tasks done, nice work!",
            Self::AlmostThere => "Almost there, keep going!",
            Self::Halfway => "Halfway there!",
            Self::GoodProgress => "Good progress so far",
            Self::JustStarted => "Just getting started",
        }
    }
}

/// Pick the completion tier for a percentage and task count.
///
/// With no tasks the percentage is ignored.
#[must_use]
pub fn completion_tier(percentage: f64, total_tasks: usize) -> CompletionTier {
    if total_tasks == 0 {
        return CompletionTier::NoTasks;
    }
    COMPLETION_TIERS
        .iter()
        .find(|(threshold, _)| percentage >= *threshold)
        .map_or(CompletionTier::JustStarted, |(_, tier)| *tier)
}

/// Message for a percentage and task count.
#[must_use]
pub fn completion_message(percentage: f64, total_tasks: usize) -> &'static str {
    completion_tier(percentage, total_tasks).message()
}

/// Time-of-day greeting tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Greeting {
    Morning,
    Afternoon,
    Evening,
    Night,
}

/// Half-open `[from, until)` hour windows. Hours outside all of them are night.
const GREETING_WINDOWS: [(u32, u32, Greeting); 3] = [
    (5, 12, Greeting::Morning),
    (12, 17, Greeting::Afternoon),
    (17, 21, Greeting::Evening),
];

impl Greeting {
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Morning => "Good morning",
            Self::Afternoon => "Good afternoon",
            Self::Evening => "Good evening",
            Self::Night => "Good night",
        }
    }
}

/// Greeting for a local hour (0-23).
#[must_use]
pub fn time_greeting(hour: u32) -> Greeting {
    GREETING_WINDOWS
        .iter()
        .find(|(from, until, _)| (*from..*until).contains(&hour))
        .map_or(Greeting::Night, |(_, _, greeting)| *greeting)
}
