//! JSON output formatting for tasklens.

use serde::Serialize;
use serde_json::json;

use crate::core::FilterMode;
use crate::error::TaskError;
use crate::features::Dashboard;
use crate::tasks::Task;

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `TaskError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[&Task], mode: &FilterMode) -> Result<String, TaskError> {
    let output = json!({
        "filter": mode.to_string(),
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a single task as JSON
///
/// # Errors
///
/// Returns `TaskError::Parse` if JSON serialization fails.
pub fn format_task_json(task: &Task) -> Result<String, TaskError> {
    let mut value = serde_json::to_value(task)?;
    if let Some(map) = value.as_object_mut() {
        map.insert(
            "effectivePriority".to_string(),
            serde_json::to_value(task.effective_priority())?,
        );
    }
    Ok(serde_json::to_string_pretty(&value)?)
}

/// Format the home dashboard as JSON.
///
/// Display toggles only affect pretty output; JSON always carries every
/// derived value.
///
/// # Errors
///
/// Returns `TaskError::Parse` if JSON serialization fails.
pub fn format_dashboard_json(dashboard: &Dashboard<'_, Task>) -> Result<String, TaskError> {
    let stats = &dashboard.stats;
    let output = json!({
        "now": dashboard.now,
        "greeting": {
            "tier": dashboard.greeting,
            "message": dashboard.greeting.message(),
        },
        "completion": {
            "tier": dashboard.completion,
            "message": dashboard.completion.message(),
            "completedCount": stats.completed_count,
            "totalCount": stats.total_count,
            "completedPercentage": stats.completed_percentage,
        },
        "dueToday": stats.due_today,
        "filter": dashboard.mode.to_string(),
        "visible": dashboard.visible,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TaskError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, TaskError> {
    Ok(serde_json::to_string_pretty(value)?)
}
