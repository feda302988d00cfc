//! Path resolution for tasklens configuration and data files.
//!
//! All tasklens data is stored in `~/.tasklens/`:
//! - `config.yaml` - Main configuration file
//! - `tasks.json` - Task collection used when `--file` is not given

use std::path::PathBuf;

use crate::error::TaskError;

/// Paths to tasklens configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tasklens/`
    pub root: PathBuf,
    /// Config file: `~/.tasklens/config.yaml`
    pub config_file: PathBuf,
    /// Task file: `~/.tasklens/tasks.json`
    pub tasks_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TaskError> {
        let home = std::env::var("HOME").map_err(|_| {
            TaskError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".tasklens")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            tasks_file: root.join("tasks.json"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TaskError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TaskError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-tasklens");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.config_file, root.join("config.yaml"));
        assert_eq!(paths.tasks_file, root.join("tasks.json"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested").join(".tasklens"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
