//! Output formatting for tasklens.
//!
//! This module provides formatters for displaying tasks and the dashboard in
//! various formats.

mod json;
mod pretty;

use chrono::NaiveDateTime;

use crate::cli::args::OutputFormat;
use crate::config::DisplayConfig;
use crate::core::FilterMode;
use crate::error::TaskError;
use crate::features::Dashboard;
use crate::tasks::Task;

pub use json::*;
pub use pretty::*;

/// Format a filtered task list based on output format
///
/// # Errors
///
/// Returns `TaskError::Parse` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[&Task],
    mode: &FilterMode,
    now: NaiveDateTime,
    format: OutputFormat,
) -> Result<String, TaskError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, mode.label(), now)),
        OutputFormat::Json => format_tasks_json(tasks, mode),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `TaskError::Parse` if JSON serialization fails.
pub fn format_task_details(
    task: &Task,
    now: NaiveDateTime,
    format: OutputFormat,
) -> Result<String, TaskError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_details_pretty(task, now)),
        OutputFormat::Json => format_task_json(task),
    }
}

/// Format the dashboard based on output format
///
/// # Errors
///
/// Returns `TaskError::Parse` if JSON serialization fails.
pub fn format_dashboard(
    dashboard: &Dashboard<'_, Task>,
    display: &DisplayConfig,
    format: OutputFormat,
) -> Result<String, TaskError> {
    match format {
        OutputFormat::Pretty => Ok(format_dashboard_pretty(dashboard, display)),
        OutputFormat::Json => format_dashboard_json(dashboard),
    }
}
