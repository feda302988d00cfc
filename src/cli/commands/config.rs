//! Config command implementation.

use colored::Colorize;

use crate::cli::args::{ConfigCommands, OutputFormat};
use crate::cli::commands::Context;
use crate::config::Config;
use crate::error::TaskError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// Changes are written with `save`, which is injected so tests can keep
/// the real config file untouched.
///
/// # Errors
///
/// Returns an error if the config cannot be serialized or saved.
pub fn config<F>(ctx: &mut Context, cmd: &ConfigCommands, save: F) -> Result<String, TaskError>
where
    F: FnOnce(&Config) -> Result<(), TaskError>,
{
    match cmd {
        ConfigCommands::Show => match ctx.format {
            OutputFormat::Json => to_json(&ctx.config),
            OutputFormat::Pretty => serde_yaml::to_string(&ctx.config)
                .map_err(|e| TaskError::Config(format!("Failed to serialize config: {e}"))),
        },
        ConfigCommands::ProgressBar { state } => {
            let undo = ctx.config.set_show_progress_bar(state.is_on());
            save(&ctx.config)?;

            let undo_hint = format!(
                "tasklens config progress-bar {}",
                if undo.previous() { "on" } else { "off" }
            );
            Ok(format!(
                "Progress bar {}. Undo with: {}",
                if state.is_on() { "shown" } else { "hidden" },
                undo_hint.cyan()
            ))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::Toggle;
    use crate::core::FixedClock;
    use crate::storage::TaskFile;
    use chrono::NaiveDate;

    fn context() -> Context {
        Context {
            config: Config::default(),
            store: TaskFile::at("/nonexistent/tasks.json"),
            clock: Box::new(FixedClock(
                NaiveDate::from_ymd_opt(2024, 6, 12)
                    .unwrap()
                    .and_hms_opt(9, 0, 0)
                    .unwrap(),
            )),
            format: OutputFormat::Pretty,
        }
    }

    #[test]
    fn test_hide_progress_bar_saves_and_offers_undo() {
        let mut ctx = context();
        let mut saved = None;
        let output = config(
            &mut ctx,
            &ConfigCommands::ProgressBar { state: Toggle::Off },
            |c| {
                saved = Some(c.clone());
                Ok(())
            },
        )
        .unwrap();

        assert!(!ctx.config.display.show_progress_bar);
        assert_eq!(saved.map(|c| c.display.show_progress_bar), Some(false));
        assert!(output.contains("hidden"));
        assert!(output.contains("progress-bar on"));
    }

    #[test]
    fn test_show_config_yaml() {
        let mut ctx = context();
        let output = config(&mut ctx, &ConfigCommands::Show, |_| Ok(())).unwrap();
        assert!(output.contains("show_progress_bar: true"));
        assert!(output.contains("week_start: sunday"));
    }
}
