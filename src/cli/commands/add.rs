//! Add command implementation.

use colored::Colorize;

use crate::cli::args::{AddArgs, OutputFormat};
use crate::cli::commands::Context;
use crate::core::parse_deadline_arg;
use crate::error::TaskError;
use crate::output::to_json;
use crate::tasks::{Priority, TaskDraft};

/// Execute the add command.
///
/// # Errors
///
/// Returns an error if an argument cannot be parsed, the task fails
/// validation, or the task file cannot be written.
pub fn add(ctx: &Context, args: AddArgs) -> Result<String, TaskError> {
    let now = ctx.clock.now();

    let deadline = args
        .deadline
        .as_deref()
        .map(|d| {
            parse_deadline_arg(d, now.date())
                .ok_or_else(|| TaskError::InvalidArgument(format!("unrecognized deadline '{d}'")))
        })
        .transpose()?;

    let priority = args
        .priority
        .as_deref()
        .map(str::parse::<Priority>)
        .transpose()
        .map_err(TaskError::InvalidArgument)?;

    let draft = TaskDraft {
        name: args.name,
        description: args.description,
        deadline,
        priority,
        category: args
            .categories
            .into_iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect(),
        color: args.color,
    };

    let task = draft.validate(now)?;
    ctx.store.append(task.clone())?;
    tracing::info!(id = %task.id, "added task to {}", ctx.store.path().display());

    match ctx.format {
        OutputFormat::Json => to_json(&task),
        OutputFormat::Pretty => Ok(format!(
            "{} {} ({})",
            "Added".green(),
            task.name.bold(),
            task.id.dimmed()
        )),
    }
}
