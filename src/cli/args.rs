use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "tasklens")]
#[command(about = "A to-do dashboard for the terminal: filters, progress and due-today summaries")]
#[command(long_about = "tasklens - a to-do dashboard for the terminal

Reads a JSON task file and shows your tasks filtered by day, week or a custom
date range, together with a progress summary and what is due today.

QUICK START:
  tasklens                         Show the dashboard
  tasklens list --filter today     Tasks due today
  tasklens list --filter custom --from today --to 'in 3 days'
  tasklens add \"Water plants\" --deadline tomorrow --priority high
  tasklens show <id>               Task details

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Task file to read (defaults to ~/.tasklens/tasks.json)
    #[arg(short, long, global = true, env = "TASKLENS_FILE")]
    pub file: Option<PathBuf>,

    /// Pin the current time (YYYY-MM-DDTHH:MM), for reproducible output
    #[arg(long, global = true, env = "TASKLENS_NOW", hide = true)]
    pub now: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the home dashboard
    ///
    /// Greeting, completion progress, tasks due today and the task list
    /// under the default filter. This is also what runs with no command.
    #[command(alias = "d")]
    Dashboard,

    /// List tasks matching a filter
    ///
    /// # Examples
    ///
    ///   tasklens list                       Default filter (see config)
    ///   tasklens list --filter today        Deadline today
    ///   tasklens list --filter week         Deadline between today and end of week
    ///   tasklens list --filter custom --from 2024-06-01 --to 2024-06-30
    ///
    /// A custom filter with only one bound does not filter at all.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show details of a single task
    Show {
        /// Task id
        id: String,
    },

    /// Add a task to the task file
    ///
    /// # Examples
    ///
    ///   tasklens add "Buy milk"
    ///   tasklens add "File taxes" --deadline 2025-04-15 --priority critical
    ///   tasklens add "Call mom" --deadline "tomorrow" --category family
    #[command(alias = "a")]
    Add(AddArgs),

    /// View or change settings
    Config(ConfigArgs),
}

/// Arguments for `list`.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Filter mode
    #[arg(long, value_enum)]
    pub filter: Option<FilterArg>,

    /// First day of a custom range (today, tomorrow, in N days, YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,

    /// Last day of a custom range
    #[arg(long)]
    pub to: Option<String>,
}

/// Filter mode as given on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterArg {
    All,
    Today,
    Week,
    Custom,
}

/// Arguments for `add`.
#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Task name
    pub name: String,

    /// Longer description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Deadline (YYYY-MM-DDTHH:MM, or a date such as 'tomorrow' for end of day)
    #[arg(long)]
    pub deadline: Option<String>,

    /// Priority: critical, high, medium, low
    #[arg(short, long)]
    pub priority: Option<String>,

    /// Category (repeatable)
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// Display color
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Settings subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Show or hide the dashboard progress bar
    ProgressBar {
        #[arg(value_enum)]
        state: Toggle,
    },
}

/// On/off switch value.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

impl Toggle {
    #[must_use]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_command_is_dashboard() {
        let cli = Cli::try_parse_from(["tasklens"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_dashboard_alias() {
        let cli = Cli::try_parse_from(["tasklens", "d"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Dashboard)));
    }

    #[test]
    fn test_cli_output_format_unset_by_default() {
        let cli = Cli::try_parse_from(["tasklens", "list"]).unwrap();
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_cli_output_format_json() {
        let cli = Cli::try_parse_from(["tasklens", "--output", "json", "list"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_output_format_short_after_subcommand() {
        let cli = Cli::try_parse_from(["tasklens", "list", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_list_custom_range() {
        let cli = Cli::try_parse_from([
            "tasklens", "ls", "--filter", "custom", "--from", "today", "--to", "2024-06-30",
        ])
        .unwrap();
        if let Some(Commands::List(args)) = cli.command {
            assert_eq!(args.filter, Some(FilterArg::Custom));
            assert_eq!(args.from.as_deref(), Some("today"));
            assert_eq!(args.to.as_deref(), Some("2024-06-30"));
        } else {
            panic!("Expected List command");
        }
    }

    #[test]
    fn test_cli_list_rejects_unknown_filter() {
        assert!(Cli::try_parse_from(["tasklens", "list", "--filter", "month"]).is_err());
    }

    #[test]
    fn test_cli_add_with_options() {
        let cli = Cli::try_parse_from([
            "tasklens",
            "add",
            "Call mom",
            "--deadline",
            "tomorrow",
            "-p",
            "high",
            "-c",
            "family",
            "-c",
            "phone",
        ])
        .unwrap();
        if let Some(Commands::Add(args)) = cli.command {
            assert_eq!(args.name, "Call mom");
            assert_eq!(args.deadline.as_deref(), Some("tomorrow"));
            assert_eq!(args.priority.as_deref(), Some("high"));
            assert_eq!(args.categories, vec!["family", "phone"]);
        } else {
            panic!("Expected Add command");
        }
    }

    #[test]
    fn test_cli_show() {
        let cli = Cli::try_parse_from(["tasklens", "show", "abc"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Show { id }) if id == "abc"));
    }

    #[test]
    fn test_cli_config_progress_bar() {
        let cli = Cli::try_parse_from(["tasklens", "config", "progress-bar", "off"]).unwrap();
        if let Some(Commands::Config(args)) = cli.command {
            assert!(matches!(
                args.command,
                ConfigCommands::ProgressBar { state: Toggle::Off }
            ));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_global_file_and_now() {
        let cli = Cli::try_parse_from([
            "tasklens",
            "--file",
            "/tmp/tasks.json",
            "--now",
            "2024-06-12T09:00",
            "list",
        ])
        .unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/tasks.json")));
        assert_eq!(cli.now.as_deref(), Some("2024-06-12T09:00"));
    }
}
