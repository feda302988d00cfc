use chrono::{DateTime, Local, NaiveDateTime};
use colored::{ColoredString, Colorize};
use serde_json::Value;

use crate::config::DisplayConfig;
use crate::core::Schedulable;
use crate::features::Dashboard;
use crate::tasks::{Priority, Task};

/// Width of the progress bar, in cells.
const PROGRESS_BAR_WIDTH: usize = 20;
const FULL_BLOCK: char = '█';
const EMPTY_BLOCK: char = '░';

fn status_icon(task: &Task) -> ColoredString {
    if task.done {
        "[x]".green()
    } else {
        "[ ]".white()
    }
}

fn priority_label(priority: Priority) -> ColoredString {
    let label = format!("!{priority}");
    match priority {
        Priority::Critical => label.red().bold(),
        Priority::High => label.red(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.dimmed(),
    }
}

fn format_deadline(deadline: NaiveDateTime) -> String {
    deadline.format("%Y-%m-%d %H:%M").to_string()
}

/// Stored timestamps are shown in local time when they parse, verbatim otherwise.
fn format_timestamp(value: &Value) -> String {
    match value {
        Value::String(text) => DateTime::parse_from_rfc3339(text).map_or_else(
            |_| text.clone(),
            |dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        ),
        other => other.to_string(),
    }
}

/// One list row for a task.
fn task_line(task: &Task, now: NaiveDateTime) -> String {
    let name = if task.done {
        task.name.strikethrough().to_string()
    } else {
        task.name.bold().to_string()
    };

    let mut line = format!("{} {}", status_icon(task), name);

    if let Some(priority) = task.priority {
        line.push_str(&format!("  {}", priority_label(priority)));
    }

    if let Some(deadline) = task.deadline {
        let due = format_deadline(deadline);
        if task.is_overdue(now) {
            line.push_str(&format!("  {}", format!("{due} (overdue)").red()));
        } else {
            line.push_str(&format!("  {}", due.yellow()));
        }
    }

    if !task.category.is_empty() {
        let categories = task
            .category
            .iter()
            .map(|c| format!("#{c}"))
            .collect::<Vec<_>>()
            .join(" ");
        line.push_str(&format!("  {}", categories.cyan()));
    }

    line
}

/// Format a list of tasks as a pretty table
pub fn format_tasks_pretty(tasks: &[&Task], title: &str, now: NaiveDateTime) -> String {
    if tasks.is_empty() {
        return format!("{title} (0 items)\n  No tasks");
    }

    let mut output = format!("{} ({} items)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        output.push_str(&task_line(task, now));
        output.push('\n');
    }

    output
}

/// Format a single task as pretty output
pub fn format_task_details_pretty(task: &Task, now: NaiveDateTime) -> String {
    let mut output = format!("{} {}\n", status_icon(task), task.name.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), task.id));
    output.push_str(&format!(
        "  {}: {}\n",
        "Status".dimmed(),
        if task.done { "done" } else { "open" }
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Priority".dimmed(),
        priority_label(task.effective_priority())
    ));

    if let Some(deadline) = task.deadline {
        let mut due = format_deadline(deadline);
        if task.is_overdue(now) {
            due.push_str(" (overdue)");
        }
        output.push_str(&format!("  {}: {}\n", "Deadline".dimmed(), due));
    }

    if let Some(description) = &task.description {
        output.push_str(&format!("  {}: {}\n", "Description".dimmed(), description));
    }

    if !task.category.is_empty() {
        output.push_str(&format!(
            "  {}: {}\n",
            "Categories".dimmed(),
            task.category.join(", ")
        ));
    }

    if task.pinned {
        output.push_str(&format!("  {}: yes\n", "Pinned".dimmed()));
    }

    if let Some(created) = &task.date {
        output.push_str(&format!(
            "  {}: {}\n",
            "Created".dimmed(),
            format_timestamp(created)
        ));
    }

    if let Some(saved) = &task.last_save {
        output.push_str(&format!(
            "  {}: {}\n",
            "Last saved".dimmed(),
            format_timestamp(saved)
        ));
    }

    output
}

/// Render a completion percentage as a fixed-width block bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(percentage: f64, width: usize) -> String {
    let ratio = (percentage / 100.0).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).floor() as usize).min(width);
    let mut bar = FULL_BLOCK.to_string().repeat(filled);
    bar.push_str(&EMPTY_BLOCK.to_string().repeat(width - filled));
    bar
}

/// Whole-number percentage for display. Truncated so 99.6% never reads as done.
fn format_percentage(percentage: f64) -> String {
    format!("{:.0}%", percentage.clamp(0.0, 100.0).floor())
}

/// Format the home dashboard.
pub fn format_dashboard_pretty(dashboard: &Dashboard<'_, Task>, display: &DisplayConfig) -> String {
    let mut lines = Vec::new();
    let stats = &dashboard.stats;

    if display.show_greeting {
        lines.push(format!("{}!", dashboard.greeting.message()).bold().to_string());
        lines.push(String::new());
    }

    if display.show_progress_bar {
        lines.push(format!(
            "{} {}  ({}/{} done)",
            render_progress_bar(stats.completed_percentage, PROGRESS_BAR_WIDTH).green(),
            format_percentage(stats.completed_percentage),
            stats.completed_count,
            stats.total_count
        ));
        lines.push(dashboard.completion.message().dimmed().to_string());
        lines.push(String::new());
    }

    if stats.due_today.is_empty() {
        lines.push("Nothing due today".dimmed().to_string());
    } else {
        lines.push(format!("{} ({})", "Due today".bold(), stats.due_today.len()));
        for task in &stats.due_today {
            lines.push(format!("  {}", task_line(task, dashboard.now)));
        }
    }
    lines.push(String::new());

    lines.push(format_tasks_pretty(
        &dashboard.visible,
        dashboard.mode.label(),
        dashboard.now,
    ));

    lines.join("\n")
}
