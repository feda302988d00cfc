use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::{parse_deadline, Schedulable};

/// Keys read into typed fields. Everything else lands in [`Task::extra`].
const MODELED_KEYS: [&str; 11] = [
    "id",
    "name",
    "done",
    "deadline",
    "priority",
    "description",
    "category",
    "color",
    "pinned",
    "date",
    "lastSave",
];

/// A task as stored by the caller. The engines only read it.
///
/// Fields are read leniently: a value of the wrong shape becomes "not
/// present" instead of failing the whole collection. A task that was loaded
/// and not modified is written back with its original JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Task {
    pub id: String,
    pub name: String,
    pub done: bool,
    pub deadline: Option<NaiveDateTime>,
    pub priority: Option<Priority>,
    pub description: Option<String>,
    /// Category names. Plain strings and `{ "name": .. }` objects are both read.
    pub category: Vec<String>,
    pub color: Option<String>,
    pub pinned: bool,
    /// Creation timestamp, kept as stored.
    pub date: Option<Value>,
    /// Last-save timestamp, kept as stored.
    pub last_save: Option<Value>,
    /// Fields this crate does not model, written back untouched.
    pub extra: Map<String, Value>,
    /// The object this task was read from, if any.
    source: Option<Map<String, Value>>,
}

impl Task {
    /// Create a task with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            done: false,
            deadline: None,
            priority: None,
            description: None,
            category: Vec::new(),
            color: None,
            pinned: false,
            date: None,
            last_save: None,
            extra: Map::new(),
            source: None,
        }
    }

    /// Priority for display; tasks without one are treated as medium.
    #[must_use]
    pub fn effective_priority(&self) -> Priority {
        self.priority.unwrap_or_default()
    }
}

fn read_id(raw: Option<&Value>) -> Option<String> {
    match raw {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    }
}

fn read_done(raw: Option<&Value>) -> bool {
    raw.and_then(Value::as_bool).unwrap_or(false)
}

fn read_pinned(raw: Option<&Value>) -> bool {
    raw.and_then(Value::as_bool).unwrap_or(false)
}

fn read_deadline(raw: Option<&Value>) -> Option<NaiveDateTime> {
    raw.and_then(Value::as_str).and_then(parse_deadline)
}

fn read_priority(raw: Option<&Value>) -> Option<Priority> {
    raw.and_then(Value::as_str).and_then(|s| s.parse().ok())
}

fn read_text(raw: Option<&Value>) -> Option<String> {
    raw.and_then(Value::as_str).map(str::to_string)
}

fn read_category(raw: Option<&Value>) -> Vec<String> {
    raw.and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| match item {
                    Value::String(name) => Some(name.clone()),
                    Value::Object(obj) => {
                        obj.get("name").and_then(Value::as_str).map(str::to_string)
                    },
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

fn read_opaque(raw: Option<&Value>) -> Option<Value> {
    raw.filter(|v| !v.is_null()).cloned()
}

/// Warn when `key` holds a value that reads as "not present".
fn warn_unreadable(obj: &Map<String, Value>, key: &str, readable: bool) {
    if let Some(value) = obj.get(key).filter(|v| !v.is_null()) {
        if !readable {
            tracing::warn!("ignoring unreadable {key} {value}");
        }
    }
}

impl TryFrom<Map<String, Value>> for Task {
    type Error = String;

    fn try_from(obj: Map<String, Value>) -> Result<Self, Self::Error> {
        let id = read_id(obj.get("id")).ok_or("task has no id")?;
        let name = read_text(obj.get("name")).ok_or_else(|| format!("task {id} has no name"))?;

        let deadline = read_deadline(obj.get("deadline"));
        let priority = read_priority(obj.get("priority"));
        warn_unreadable(&obj, "deadline", deadline.is_some());
        warn_unreadable(&obj, "priority", priority.is_some());
        warn_unreadable(&obj, "done", obj.get("done").is_some_and(Value::is_boolean));

        let extra = obj
            .iter()
            .filter(|(key, _)| !MODELED_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        Ok(Self {
            id,
            name,
            done: read_done(obj.get("done")),
            deadline,
            priority,
            description: read_text(obj.get("description")),
            category: read_category(obj.get("category")),
            color: read_text(obj.get("color")),
            pinned: read_pinned(obj.get("pinned")),
            date: read_opaque(obj.get("date")),
            last_save: read_opaque(obj.get("lastSave")),
            extra,
            source: Some(obj),
        })
    }
}

/// Builds the JSON object for a task, reusing stored values that still read
/// back as the current field value.
struct Writer<'a> {
    out: Map<String, Value>,
    source: Option<&'a Map<String, Value>>,
}

impl Writer<'_> {
    fn field<T: PartialEq>(
        &mut self,
        key: &str,
        value: &T,
        read: fn(Option<&Value>) -> T,
        encode: impl FnOnce(&T) -> Option<Value>,
    ) {
        if let Some(source) = self.source {
            let stored = source.get(key);
            if read(stored) == *value {
                if let Some(stored) = stored {
                    self.out.insert(key.to_string(), stored.clone());
                }
                return;
            }
        }
        if let Some(encoded) = encode(value) {
            self.out.insert(key.to_string(), encoded);
        }
    }
}

impl From<Task> for Map<String, Value> {
    fn from(task: Task) -> Self {
        let mut writer = Writer {
            out: task.extra,
            source: task.source.as_ref(),
        };

        writer.field("id", &Some(task.id), read_id, |i| i.clone().map(Value::String));
        writer.field("name", &Some(task.name), read_text, |n| n.clone().map(Value::String));
        writer.field("done", &task.done, read_done, |d| Some(Value::Bool(*d)));
        writer.field("deadline", &task.deadline, read_deadline, |d| {
            d.map(|d| Value::String(d.format("%Y-%m-%dT%H:%M:%S").to_string()))
        });
        writer.field("priority", &task.priority, read_priority, |p| {
            p.map(|p| Value::String(p.key().to_string()))
        });
        writer.field("description", &task.description, read_text, |d| {
            d.clone().map(Value::String)
        });
        writer.field("category", &task.category, read_category, |c| {
            (!c.is_empty()).then(|| Value::from(c.clone()))
        });
        writer.field("color", &task.color, read_text, |c| c.clone().map(Value::String));
        writer.field("pinned", &task.pinned, read_pinned, |p| p.then_some(Value::Bool(true)));
        writer.field("date", &task.date, read_opaque, Option::clone);
        writer.field("lastSave", &task.last_save, read_opaque, Option::clone);
        writer.out
    }
}

impl Schedulable for Task {
    fn deadline(&self) -> Option<NaiveDateTime> {
        self.deadline
    }

    fn is_done(&self) -> bool {
        self.done
    }
}

/// Task urgency, most urgent first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Lowercase name used in the task file.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(format!("unknown priority '{other}'")),
        }
    }
}
