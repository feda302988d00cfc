//! Configuration management for tasklens.
//!
//! This module handles loading and saving configuration from `~/.tasklens/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    ColorSetting, Config, DefaultFilter, DisplayConfig, FilterConfig, GeneralConfig,
    SettingUndo, WeekStart,
};
