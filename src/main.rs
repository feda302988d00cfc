use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tasklens::cli::args::{Cli, Commands};
use tasklens::cli::commands::{self, Context};
use tasklens::config::{ColorSetting, Config};
use tasklens::core::{parse_deadline, Clock, FixedClock, SystemClock};
use tasklens::error::TaskError;
use tasklens::storage::TaskFile;

fn main() {
    init_logging();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Log to stderr so output stays pipeable. Level comes from `TASKLENS_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("TASKLENS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run() -> Result<(), TaskError> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match config.general.color {
        ColorSetting::Always => colored::control::set_override(true),
        ColorSetting::Never => colored::control::set_override(false),
        ColorSetting::Auto => {},
    }

    let clock: Box<dyn Clock> = match cli.now.as_deref() {
        Some(raw) => Box::new(FixedClock(parse_deadline(raw).ok_or_else(|| {
            TaskError::InvalidArgument(format!("unrecognized --now value '{raw}'"))
        })?)),
        None => Box::new(SystemClock),
    };

    let store = match cli.file {
        Some(path) => TaskFile::at(path),
        None => TaskFile::open_default()?,
    };

    let mut ctx = Context {
        format: cli.output.unwrap_or(config.general.default_output),
        config,
        store,
        clock,
    };

    let output = match cli.command {
        None | Some(Commands::Dashboard) => commands::dashboard(&ctx)?,
        Some(Commands::List(args)) => commands::list(&ctx, &args)?,
        Some(Commands::Show { id }) => commands::show(&ctx, &id)?,
        Some(Commands::Add(args)) => commands::add(&ctx, args)?,
        Some(Commands::Config(args)) => commands::config(&mut ctx, &args.command, Config::save)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
