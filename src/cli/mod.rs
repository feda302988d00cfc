//! Command-line host for tasklens.

pub mod args;
pub mod commands;
