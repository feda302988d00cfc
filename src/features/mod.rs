//! Feature modules for tasklens.
//!
//! - `stats`: completion numbers, due-today list, message and greeting tiers
//! - `dashboard`: the home view, built from one reading of the clock

pub mod dashboard;
pub mod stats;

pub use dashboard::Dashboard;
