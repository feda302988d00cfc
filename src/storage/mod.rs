//! Storage layer for tasklens.
//!
//! The engines work on an in-memory collection; this module only exists so
//! the command-line host has somewhere to read tasks from and append new
//! ones to.

mod task_file;

pub use task_file::TaskFile;
