//! tasklens - a to-do dashboard for the terminal
//!
//! The library holds two independent engines over a caller-owned task
//! collection: a date filter ([`core::filter_tasks`]) and progress statistics
//! ([`features::stats::compute_statistics`]). Neither reads the clock; the
//! caller passes in the day or hour, usually from a single [`core::Clock`]
//! reading per pass.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;
pub mod tasks;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TaskError;
pub use tasks::Task;
