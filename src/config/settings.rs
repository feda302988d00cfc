//! Configuration settings for tasklens.
//!
//! Settings are loaded from `~/.tasklens/config.yaml`.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::core::FilterMode;
use crate::error::TaskError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Dashboard display settings.
    pub display: DisplayConfig,
    /// Task list filter settings.
    pub filter: FilterConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// What the dashboard shows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the completion progress bar and message.
    #[serde(default = "default_true")]
    pub show_progress_bar: bool,
    /// Show the time-of-day greeting.
    #[serde(default = "default_true")]
    pub show_greeting: bool,
}

/// Task list filter settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FilterConfig {
    /// First day of the week for the "this week" filter.
    #[serde(default = "default_week_start")]
    pub week_start: WeekStart,
    /// Mode used when `list` is run without `--filter`.
    #[serde(default)]
    pub default_mode: DefaultFilter,
}

/// First day of a calendar week.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    /// Week runs Sunday to Saturday.
    #[default]
    Sunday,
    /// Week runs Monday to Sunday.
    Monday,
}

impl WeekStart {
    #[must_use]
    pub const fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }
}

/// Filter modes that can be stored as a default. Custom ranges are per-run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DefaultFilter {
    #[default]
    All,
    Today,
    Week,
}

impl From<DefaultFilter> for FilterMode {
    fn from(value: DefaultFilter) -> Self {
        match value {
            DefaultFilter::All => Self::All,
            DefaultFilter::Today => Self::Today,
            DefaultFilter::Week => Self::ThisWeek,
        }
    }
}

/// Previous value of a changed setting, used to undo the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct SettingUndo {
    previous: bool,
}

impl SettingUndo {
    /// The value before the change.
    pub const fn previous(self) -> bool {
        self.previous
    }

    /// Put the progress-bar setting back to its previous value.
    pub fn undo(self, config: &mut Config) {
        config.display.show_progress_bar = self.previous;
    }
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_true() -> bool {
    true
}

const fn default_week_start() -> WeekStart {
    WeekStart::Sunday
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_progress_bar: default_true(),
            show_greeting: default_true(),
        }
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            week_start: default_week_start(),
            default_mode: DefaultFilter::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, TaskError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TaskError> {
        if !path.exists() {
            tracing::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TaskError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TaskError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), TaskError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TaskError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TaskError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TaskError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Show or hide the progress bar, returning a handle to undo the change.
    pub fn set_show_progress_bar(&mut self, show: bool) -> SettingUndo {
        let previous = self.display.show_progress_bar;
        self.display.show_progress_bar = show;
        SettingUndo { previous }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.general.color, ColorSetting::Auto);
        assert!(config.display.show_progress_bar);
        assert!(config.display.show_greeting);
        assert_eq!(config.filter.week_start, WeekStart::Sunday);
        assert_eq!(config.filter.default_mode, DefaultFilter::All);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.display.show_greeting = false;
        config.filter.week_start = WeekStart::Monday;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert!(!loaded.display.show_greeting);
        assert_eq!(loaded.filter.week_start, WeekStart::Monday);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let partial_yaml = r#"
filter:
  week_start: monday
"#;
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(config.filter.week_start.weekday(), Weekday::Mon);
        // Defaults should be used for missing fields
        assert_eq!(config.filter.default_mode, DefaultFilter::All);
        assert!(config.display.show_progress_bar);
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "filter:\n  week_start: friday\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, TaskError::Config(_)));
    }

    #[test]
    fn test_progress_bar_toggle_undo() {
        let mut config = Config::default();

        let undo = config.set_show_progress_bar(false);
        assert!(!config.display.show_progress_bar);
        assert!(undo.previous());

        undo.undo(&mut config);
        assert!(config.display.show_progress_bar);
    }

    #[test]
    fn test_default_filter_into_mode() {
        assert_eq!(FilterMode::from(DefaultFilter::Week), FilterMode::ThisWeek);
        assert_eq!(FilterMode::from(DefaultFilter::Today), FilterMode::Today);
    }
}
