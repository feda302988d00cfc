//! New-task input and the rules a task must pass before it is stored.

use chrono::{Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde_json::Value;
use uuid::Uuid;

use super::types::{Priority, Task};
use crate::error::TaskError;

/// Maximum length of a task name, in characters.
pub const NAME_MAX_LEN: usize = 40;

/// Maximum length of a task description, in characters.
pub const DESCRIPTION_MAX_LEN: usize = 350;

/// User input for a task that does not exist yet.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub name: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDateTime>,
    pub priority: Option<Priority>,
    pub category: Vec<String>,
    pub color: Option<String>,
}

impl TaskDraft {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Check the draft against `now` and turn it into a task with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `TaskError::Validation` if the name is empty or too long, the
    /// description is too long, or the deadline lies before `now`.
    pub fn validate(self, now: NaiveDateTime) -> Result<Task, TaskError> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(TaskError::Validation("task name is required".to_string()));
        }
        if name.chars().count() > NAME_MAX_LEN {
            return Err(TaskError::Validation(format!(
                "task name must be at most {NAME_MAX_LEN} characters"
            )));
        }

        let description = self
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        if description
            .as_ref()
            .is_some_and(|d| d.chars().count() > DESCRIPTION_MAX_LEN)
        {
            return Err(TaskError::Validation(format!(
                "description must be at most {DESCRIPTION_MAX_LEN} characters"
            )));
        }

        if let Some(deadline) = self.deadline {
            if deadline < now {
                return Err(TaskError::Validation(format!(
                    "deadline {} is in the past",
                    deadline.format("%Y-%m-%d %H:%M")
                )));
            }
        }

        let created = Local
            .from_local_datetime(&now)
            .earliest()
            .map_or_else(Utc::now, |dt| dt.with_timezone(&Utc))
            .to_rfc3339_opts(SecondsFormat::Millis, true);

        let mut task = Task::new(Uuid::new_v4().to_string(), name);
        task.description = description;
        task.deadline = self.deadline;
        task.priority = self.priority;
        task.category = self.category;
        task.color = self.color;
        task.date = Some(Value::String(created.clone()));
        task.last_save = Some(Value::String(created));
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 12)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_valid_draft_becomes_task() {
        let mut draft = TaskDraft::new("  Water plants ");
        draft.priority = Some(Priority::High);
        draft.deadline = Some(now() + Duration::hours(2));
        draft.description = Some("   ".to_string());

        let task = draft.validate(now()).unwrap();
        assert_eq!(task.name, "Water plants");
        assert_eq!(task.priority, Some(Priority::High));
        assert_eq!(task.description, None);
        assert!(!task.done);
        assert!(Uuid::parse_str(&task.id).is_ok());
        let created = task.date.as_ref().and_then(Value::as_str).unwrap();
        assert!(created.ends_with(".000Z"));
        assert_eq!(task.last_save, task.date);
    }

    #[test]
    fn test_each_draft_gets_its_own_id() {
        let a = TaskDraft::new("a").validate(now()).unwrap();
        let b = TaskDraft::new("b").validate(now()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = TaskDraft::new("   ").validate(now()).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
    }

    #[test]
    fn test_name_length_limit() {
        assert!(TaskDraft::new("x".repeat(NAME_MAX_LEN)).validate(now()).is_ok());
        assert!(TaskDraft::new("x".repeat(NAME_MAX_LEN + 1))
            .validate(now())
            .is_err());
    }

    #[test]
    fn test_description_length_limit() {
        let mut draft = TaskDraft::new("ok");
        draft.description = Some("d".repeat(DESCRIPTION_MAX_LEN + 1));
        assert!(draft.validate(now()).is_err());
    }

    #[test]
    fn test_past_deadline_rejected() {
        let mut draft = TaskDraft::new("late");
        draft.deadline = Some(now() - Duration::minutes(1));
        assert!(matches!(
            draft.validate(now()),
            Err(TaskError::Validation(_))
        ));

        let mut draft = TaskDraft::new("on time");
        draft.deadline = Some(now());
        assert!(draft.validate(now()).is_ok());
    }
}
