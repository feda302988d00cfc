//! Command implementations for tasklens.
//!
//! Each command receives a [`Context`] holding the loaded config, the task
//! store and the clock, and returns the text to print.

mod add;
mod config;

pub use add::add;
pub use config::config;

use chrono::NaiveDateTime;
use colored::Colorize;

use crate::cli::args::{FilterArg, ListArgs, OutputFormat};
use crate::config::Config;
use crate::core::{filter_tasks, parse_date, Clock, DateRange, FilterMode};
use crate::error::TaskError;
use crate::features::Dashboard;
use crate::output::{format_dashboard, format_task_details, format_tasks};
use crate::storage::TaskFile;

/// Everything a command needs from its surroundings.
pub struct Context {
    pub config: Config,
    pub store: TaskFile,
    pub clock: Box<dyn Clock>,
    pub format: OutputFormat,
}

/// Execute the dashboard command (also the default with no command).
///
/// # Errors
///
/// Returns an error if the task file cannot be read or output formatting fails.
pub fn dashboard(ctx: &Context) -> Result<String, TaskError> {
    let tasks = ctx.store.load()?;
    let mode = FilterMode::from(ctx.config.filter.default_mode);
    let view = Dashboard::observe(
        &tasks,
        &mode,
        ctx.clock.as_ref(),
        ctx.config.filter.week_start.weekday(),
    );
    format_dashboard(&view, &ctx.config.display, ctx.format)
}

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if a range bound cannot be parsed, the task file cannot be
/// read, or output formatting fails.
pub fn list(ctx: &Context, args: &ListArgs) -> Result<String, TaskError> {
    let now = ctx.clock.now();
    let mode = resolve_mode(ctx, args, now)?;

    if let FilterMode::Custom(range) = mode {
        if range.is_inverted() {
            eprintln!(
                "{}: start date is after end date, no task can match",
                "warning".yellow().bold()
            );
        }
    }

    let tasks = ctx.store.load()?;
    let visible = filter_tasks(
        &tasks,
        &mode,
        now.date(),
        ctx.config.filter.week_start.weekday(),
    );
    format_tasks(&visible, &mode, now, ctx.format)
}

/// Execute the show command.
///
/// # Errors
///
/// Returns `TaskError::NotFound` if no task has the given id.
pub fn show(ctx: &Context, id: &str) -> Result<String, TaskError> {
    let tasks = ctx.store.load()?;
    let task = tasks
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| TaskError::NotFound(format!("task '{id}'")))?;
    format_task_details(task, ctx.clock.now(), ctx.format)
}

/// Work out the filter mode from `list` arguments and config.
///
/// `--from`/`--to` without `--filter` imply a custom range.
fn resolve_mode(ctx: &Context, args: &ListArgs, now: NaiveDateTime) -> Result<FilterMode, TaskError> {
    let has_bounds = args.from.is_some() || args.to.is_some();
    let filter = match args.filter {
        Some(filter) => filter,
        None if has_bounds => FilterArg::Custom,
        None => return Ok(ctx.config.filter.default_mode.into()),
    };

    if has_bounds && filter != FilterArg::Custom {
        return Err(TaskError::InvalidArgument(
            "--from/--to only apply to --filter custom".to_string(),
        ));
    }

    let today = now.date();
    let bound = |value: Option<&String>| -> Result<Option<chrono::NaiveDate>, TaskError> {
        value
            .map(|v| {
                parse_date(v, today)
                    .ok_or_else(|| TaskError::InvalidArgument(format!("unrecognized date '{v}'")))
            })
            .transpose()
    };

    Ok(match filter {
        FilterArg::All => FilterMode::All,
        FilterArg::Today => FilterMode::Today,
        FilterArg::Week => FilterMode::ThisWeek,
        FilterArg::Custom => FilterMode::Custom(DateRange::new(
            bound(args.from.as_ref())?,
            bound(args.to.as_ref())?,
        )),
    })
}
