//! JSON task file.
//!
//! The file holds a JSON array of tasks. Fields tasklens does not model are
//! carried through a load/save cycle unchanged, and entries that do not read
//! as tasks are skipped on load but kept by [`TaskFile::append`].

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::Paths;
use crate::error::TaskError;
use crate::tasks::Task;

/// A task collection backed by a JSON file.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    /// Use the default task file, `~/.tasklens/tasks.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn open_default() -> Result<Self, TaskError> {
        let paths = Paths::new()?;
        Ok(Self::at(paths.tasks_file))
    }

    /// Use the task file at `path`.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all tasks. A missing file is an empty collection.
    ///
    /// Entries that are not task objects are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON array.
    pub fn load(&self) -> Result<Vec<Task>, TaskError> {
        let tasks = Self::read_entries(self.load_raw()?);
        tracing::debug!(count = tasks.len(), "loaded tasks from {}", self.path.display());
        Ok(tasks)
    }

    /// Replace the file contents with `tasks`.
    ///
    /// Writes to a sibling temp file first and renames it into place.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, tasks: &[Task]) -> Result<(), TaskError> {
        let entries = tasks
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;
        self.write_raw(&entries)
    }

    /// Append one task and save. Existing entries are written back as read.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or written.
    pub fn append(&self, task: Task) -> Result<Vec<Task>, TaskError> {
        let mut entries = self.load_raw()?;
        entries.push(serde_json::to_value(&task)?);
        self.write_raw(&entries)?;
        Ok(Self::read_entries(entries))
    }

    fn load_raw(&self) -> Result<Vec<Value>, TaskError> {
        if !self.path.exists() {
            tracing::debug!("no task file at {}", self.path.display());
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_raw(&self, entries: &[Value]) -> Result<(), TaskError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, contents)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn read_entries(entries: Vec<Value>) -> Vec<Task> {
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(task) => Some(task),
                Err(e) => {
                    tracing::warn!("skipping task entry {index}: {e}");
                    None
                },
            })
            .collect()
    }
}
